use glam::DVec3;
use infohub_common::{
    BlockPos, EntityId, LightChannel, DAY_LENGTH_TICKS, NIGHT_START_TICKS, TICKS_PER_SECOND,
};
use infohub_kernel::{ConnectionRoster, Observer, WorldView};
use serde::Serialize;

/// Light at the block under the observer's feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LightSample {
    pub combined: u8,
    pub sky: u8,
    pub block: u8,
}

/// Day/night phase and time until it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayPhase {
    pub is_night: bool,
    pub seconds_to_transition: u32,
}

/// Per-tick scalar snapshot. Overwritten every tick; no history.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedMetrics {
    pub fps: u32,
    pub latency_ms: u32,
    /// Horizontal speed in blocks per second.
    pub speed_bps: f64,
    pub is_night: bool,
    pub seconds_to_transition: u32,
    pub light: LightSample,
}

/// Stateless per-tick formulas.
pub struct MetricsComputer;

impl MetricsComputer {
    /// All metrics for one tick.
    pub fn compute(
        world: &dyn WorldView,
        observer: &Observer,
        roster: Option<&dyn ConnectionRoster>,
        fps: u32,
    ) -> DerivedMetrics {
        let phase = Self::day_phase(world.time_of_day());
        DerivedMetrics {
            fps,
            latency_ms: Self::latency_ms(roster, observer.id),
            speed_bps: Self::horizontal_speed(observer.velocity),
            is_night: phase.is_night,
            seconds_to_transition: phase.seconds_to_transition,
            light: Self::sample_light(world, observer.block_pos().down()),
        }
    }

    /// Horizontal speed in blocks per second from a per-tick velocity.
    pub fn horizontal_speed(velocity: DVec3) -> f64 {
        (velocity.x * velocity.x + velocity.z * velocity.z).sqrt() * f64::from(TICKS_PER_SECOND)
    }

    /// Night holds for `t mod 24000` in `[13000, 24000)`.
    pub fn day_phase(time_of_day: i64) -> DayPhase {
        let t = time_of_day.rem_euclid(DAY_LENGTH_TICKS);
        let is_night = t >= NIGHT_START_TICKS;
        let ticks_left = if is_night {
            DAY_LENGTH_TICKS - t
        } else {
            NIGHT_START_TICKS - t
        };
        let tps = i64::from(TICKS_PER_SECOND);
        // Round up so the countdown does not reach 0 a second early.
        let seconds = (ticks_left.max(0) + tps - 1) / tps;
        DayPhase {
            is_night,
            seconds_to_transition: u32::try_from(seconds).unwrap_or(u32::MAX),
        }
    }

    pub fn sample_light(world: &dyn WorldView, ground: BlockPos) -> LightSample {
        LightSample {
            combined: world.light_level(ground, LightChannel::Combined),
            sky: world.light_level(ground, LightChannel::Sky),
            block: world.light_level(ground, LightChannel::Block),
        }
    }

    /// Roster latency for `id`; 0 when there is no roster, no entry, or a
    /// negative report.
    pub fn latency_ms(roster: Option<&dyn ConnectionRoster>, id: EntityId) -> u32 {
        roster
            .and_then(|r| r.latency_ms(id))
            .map(|ms| u32::try_from(ms).unwrap_or(0))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infohub_kernel::{PlayerList, World};

    #[test]
    fn speed_from_horizontal_velocity() {
        let v = DVec3::new(3.0, 0.0, 4.0);
        assert_eq!(MetricsComputer::horizontal_speed(v), 100.0);
    }

    #[test]
    fn vertical_velocity_is_ignored() {
        let v = DVec3::new(0.0, -3.9, 0.0);
        assert_eq!(MetricsComputer::horizontal_speed(v), 0.0);
    }

    #[test]
    fn last_tick_of_day() {
        let p = MetricsComputer::day_phase(12_999);
        assert!(!p.is_night);
        assert_eq!(p.seconds_to_transition, 1);
    }

    #[test]
    fn first_tick_of_night() {
        let p = MetricsComputer::day_phase(13_000);
        assert!(p.is_night);
        assert_eq!(p.seconds_to_transition, 550);
    }

    #[test]
    fn day_phase_wraps_absolute_time() {
        assert_eq!(
            MetricsComputer::day_phase(24_000 * 5 + 100),
            MetricsComputer::day_phase(100)
        );
        let p = MetricsComputer::day_phase(0);
        assert!(!p.is_night);
        assert_eq!(p.seconds_to_transition, 650);
    }

    #[test]
    fn last_tick_of_night() {
        let p = MetricsComputer::day_phase(23_999);
        assert!(p.is_night);
        assert_eq!(p.seconds_to_transition, 1);
    }

    #[test]
    fn negative_time_is_reduced_euclidean() {
        let p = MetricsComputer::day_phase(-1);
        assert!(p.is_night);
        assert_eq!(p.seconds_to_transition, 1);
    }

    #[test]
    fn light_sampled_below_feet() {
        let mut world = World::default();
        let ground = BlockPos::new(0, 63, 0);
        world.set_sky_light(ground, 7);
        world.set_block_light(ground, 12);
        let observer = Observer {
            id: EntityId::new(),
            position: DVec3::new(0.5, 64.0, 0.5),
            velocity: DVec3::ZERO,
        };
        let m = MetricsComputer::compute(&world, &observer, None, 60);
        assert_eq!(
            m.light,
            LightSample {
                combined: 12,
                sky: 7,
                block: 12
            }
        );
        assert_eq!(m.fps, 60);
    }

    #[test]
    fn latency_defaults_to_zero() {
        let id = EntityId::new();
        assert_eq!(MetricsComputer::latency_ms(None, id), 0);

        let mut roster = PlayerList::new();
        assert_eq!(MetricsComputer::latency_ms(Some(&roster), id), 0);

        roster.set_latency(id, -5);
        assert_eq!(MetricsComputer::latency_ms(Some(&roster), id), 0);

        roster.set_latency(id, 87);
        assert_eq!(MetricsComputer::latency_ms(Some(&roster), id), 87);
    }
}
