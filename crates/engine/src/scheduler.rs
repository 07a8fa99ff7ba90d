use infohub_common::WorldId;
use infohub_input::KeyEdge;
use infohub_kernel::{ConnectionRoster, Observer, WorldView};
use infohub_scan::{scan, DarkSolidGround, SpawnPredicate};
use infohub_spatial::{chunks_to_blocks, MobSampler, PlayerSampler};

use crate::config::{ConfigError, EngineConfig};
use crate::events::HubEvent;
use crate::metrics::{DerivedMetrics, MetricsComputer};
use crate::notify::NotificationTracker;
use crate::state::HubState;

/// Which world the world-scoped caches belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Unbound,
    Bound(WorldId),
}

/// Everything the host hands over for one tick.
///
/// Borrowed views live only for the duration of [`TickScheduler::tick`].
#[derive(Clone, Copy, Default)]
pub struct TickInput<'a> {
    pub world: Option<&'a dyn WorldView>,
    pub observer: Option<Observer>,
    pub roster: Option<&'a dyn ConnectionRoster>,
    pub fps: u32,
    /// Whether the spawn-marker toggle key is held this tick.
    pub toggle_key_down: bool,
}

impl<'a> TickInput<'a> {
    /// No world loaded (main menu, loading screen).
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn in_world(world: &'a dyn WorldView, observer: Observer) -> Self {
        Self {
            world: Some(world),
            observer: Some(observer),
            ..Self::default()
        }
    }

    pub fn with_roster(mut self, roster: &'a dyn ConnectionRoster) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_toggle_key(mut self, down: bool) -> Self {
        self.toggle_key_down = down;
        self
    }
}

/// Owns all derived state and decides, tick by tick, what to recompute.
///
/// - metrics: every tick
/// - player/mob counters and nearby-player notices: every
///   `counter_interval_ticks`
/// - spawn markers: every `scan.interval_ticks` while enabled
///
/// Constructed and owned by the host loop; there is no global instance.
pub struct TickScheduler {
    config: EngineConfig,
    players: PlayerSampler,
    mobs: MobSampler,
    predicate: Box<dyn SpawnPredicate>,
    toggle_key: KeyEdge,
    notifier: NotificationTracker,
    binding: Binding,
    ticks: u64,
    state: HubState,
    events: Vec<HubEvent>,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

impl TickScheduler {
    /// Validate `config` and build an unbound scheduler.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let players = PlayerSampler::new(
            &config.player_radii_chunks,
            config.player_notify_radius_chunks,
        );
        let mobs = MobSampler::new(&config.mob_radii);
        let state = HubState::new(players.bucket_count(), mobs.bucket_count());
        Self {
            config,
            players,
            mobs,
            predicate: Box::new(DarkSolidGround),
            toggle_key: KeyEdge::new(),
            notifier: NotificationTracker::new(),
            binding: Binding::Unbound,
            ticks: 0,
            state,
            events: Vec::new(),
        }
    }

    /// Replace the spawn heuristic.
    pub fn with_predicate(mut self, predicate: Box<dyn SpawnPredicate>) -> Self {
        self.predicate = predicate;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read-only view for the presentation layer.
    pub fn state(&self) -> &HubState {
        &self.state
    }

    /// Owned copy of the state, for handing to a render thread.
    pub fn snapshot(&self) -> HubState {
        self.state.clone()
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    /// Ticks processed while in a world.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn notifier(&self) -> &NotificationTracker {
        &self.notifier
    }

    /// Pending user-facing messages, oldest first.
    pub fn events(&self) -> &[HubEvent] {
        &self.events
    }

    /// Take all pending messages.
    pub fn drain_events(&mut self) -> Vec<HubEvent> {
        std::mem::take(&mut self.events)
    }

    /// Connection established to a world.
    pub fn on_join_world(&mut self, world: WorldId) {
        tracing::debug!(?world, "join world");
        self.binding = Binding::Bound(world);
        self.clear_world_caches();
        self.state.reset_derived();
    }

    /// Disconnected; nothing from the old world may survive.
    pub fn on_leave_world(&mut self) {
        tracing::debug!("leave world");
        self.binding = Binding::Unbound;
        self.clear_world_caches();
        self.state.reset_derived();
    }

    /// Enable or disable spawn markers without emitting a message.
    /// Disabling drops the current markers immediately.
    pub fn set_spawn_markers(&mut self, enabled: bool) {
        self.state.spawn_markers_enabled = enabled;
        if !enabled {
            self.state.spawn_markers.clear();
        }
    }

    /// Run one host tick.
    pub fn tick(&mut self, input: TickInput<'_>) {
        let _span = tracing::trace_span!("infohub_tick", tick = self.ticks).entered();

        if self.toggle_key.update(input.toggle_key_down) {
            let enabled = !self.state.spawn_markers_enabled;
            self.set_spawn_markers(enabled);
            tracing::debug!(enabled, "spawn markers toggled");
            if input.observer.is_some() {
                self.events.push(HubEvent::SpawnMarkersToggled { enabled });
            }
        }

        let (Some(world), Some(observer)) = (input.world, input.observer) else {
            self.state.reset_derived();
            return;
        };

        self.ensure_bound(world.world_id());
        self.ticks += 1;

        self.state.metrics = MetricsComputer::compute(world, &observer, input.roster, input.fps);

        if self.ticks % u64::from(self.config.counter_interval_ticks) == 0 {
            self.update_counters(world, &observer);
        }

        if self.state.spawn_markers_enabled
            && self.ticks % u64::from(self.config.scan.interval_ticks) == 0
        {
            let result = scan(
                world,
                observer.block_pos(),
                &self.config.scan,
                self.predicate.as_ref(),
            );
            self.state.spawn_markers = result.markers;
        }
    }

    fn ensure_bound(&mut self, world: WorldId) {
        if self.binding == Binding::Bound(world) {
            return;
        }
        tracing::debug!(?world, previous = ?self.binding, "world changed, rebinding");
        self.binding = Binding::Bound(world);
        self.clear_world_caches();
    }

    /// Drop every world-scoped cache. Calling it twice is the same as once.
    fn clear_world_caches(&mut self) {
        self.notifier.reset();
        self.state.spawn_markers.clear();
        self.state.players.clear();
        self.state.mobs.clear();
    }

    fn update_counters(&mut self, world: &dyn WorldView, observer: &Observer) {
        let sample = self.players.sample(world, observer);
        self.state.players = sample.counts;

        let radius_blocks = chunks_to_blocks(self.config.player_notify_radius_chunks) as u32;
        for id in self.notifier.update(sample.nearby) {
            let name = world.display_name(id).unwrap_or_else(|| id.to_string());
            tracing::debug!(%id, %name, "player entered notify radius");
            self.events.push(HubEvent::PlayerNearby {
                id,
                name,
                radius_blocks,
            });
        }

        self.state.mobs = self.mobs.sample(world, observer);
        tracing::trace!(
            players = ?self.state.players.as_slice(),
            mobs = ?self.state.mobs.as_slice(),
            "counters updated"
        );
    }
}

impl std::fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickScheduler")
            .field("binding", &self.binding)
            .field("ticks", &self.ticks)
            .field("state", &self.state)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}
