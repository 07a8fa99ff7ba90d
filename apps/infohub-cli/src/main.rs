use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::DVec3;
use infohub_common::{BlockPos, EntityId};
use infohub_engine::{EngineConfig, TickInput, TickScheduler};
use infohub_hud::{HudRenderer, HudView, MarkerOutlines, TextHud};
use infohub_kernel::{BlockInfo, Observer, PlayerList, World, WorldView};
use infohub_scan::{scan, DarkSolidGround};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "infohub-cli", about = "Headless driver for the InfoHub engine")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML file overriding engine tunables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the effective configuration
    Info,
    /// Run a scripted session and print HUD lines and messages
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "200")]
        ticks: u64,
        /// Print the HUD every N ticks
        #[arg(short, long, default_value = "20")]
        every: u64,
        /// Tick at which the client switches to a second world
        #[arg(long, default_value = "120")]
        switch_at: u64,
        /// Print the final state as JSON instead of HUD lines
        #[arg(long)]
        json: bool,
    },
    /// Run one spawn scan over generated terrain
    Scan {
        /// Half-width of the generated terrain, in blocks
        #[arg(short, long, default_value = "32")]
        size: i32,
        /// Place a light source every N blocks along each axis (0 = none)
        #[arg(short, long, default_value = "8")]
        lights: i32,
        /// Print the markers as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Info => {
            println!("infohub-cli v{}", env!("CARGO_PKG_VERSION"));
            let world = World::default();
            println!("kernel: y={}..{}", world.bottom_y(), world.top_y());
            println!("spatial: {}", infohub_spatial::crate_info());
            println!("scan: {}", infohub_scan::crate_info());
            println!("engine: {}", infohub_engine::crate_info());
            println!("hud: {}", infohub_hud::crate_info());
            println!("---");
            print!("{}", serde_yaml::to_string(&config)?);
        }
        Commands::Simulate {
            ticks,
            every,
            switch_at,
            json,
        } => simulate(config, ticks, every.max(1), switch_at, json)?,
        Commands::Scan { size, lights, json } => run_scan(&config, size, lights, json)?,
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = EngineConfig::from_yaml_str(&text)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Flat dark floor at y=63 with the observer standing on it.
fn arena(half: i32) -> World {
    let mut world = World::default();
    world.set_ambient_sky_light(0);
    world.fill(
        BlockPos::new(-half, 63, -half),
        BlockPos::new(half, 63, half),
        BlockInfo::SOLID,
    );
    world
}

struct Session {
    world: World,
    observer: Observer,
    walker: EntityId,
}

impl Session {
    fn start(time_of_day: i64, walker_name: &str, bystanders: &[(&str, DVec3)]) -> Self {
        let mut world = arena(24);
        world.set_time_of_day(time_of_day);
        let position = DVec3::new(0.5, 64.0, 0.5);
        let id = world.spawn_player("Observer", position);
        for (name, pos) in bystanders {
            world.spawn_player(*name, *pos);
        }
        for i in 0..6 {
            let angle = f64::from(i) * std::f64::consts::TAU / 6.0;
            let r = 10.0 + 12.0 * f64::from(i);
            world.spawn_mob(i % 2 == 0, DVec3::new(r * angle.cos(), 64.0, r * angle.sin()));
        }
        world.set_block_light(BlockPos::new(0, 63, 0), 7);
        let walker = world.spawn_player(walker_name, DVec3::new(160.0, 64.0, 0.5));
        Self {
            world,
            observer: Observer {
                id,
                position,
                velocity: DVec3::new(0.05, 0.0, 0.0),
            },
            walker,
        }
    }

    /// Advance host time and move the scripted entities.
    fn step(&mut self) {
        self.world.step();
        self.observer.position += self.observer.velocity;
        self.world.set_position(self.observer.id, self.observer.position);
        if let Some(data) = self.world.get(self.walker) {
            let next = data.position - DVec3::new(1.0, 0.0, 0.0);
            self.world.set_position(self.walker, next);
        }
    }
}

fn simulate(
    config: EngineConfig,
    ticks: u64,
    every: u64,
    switch_at: u64,
    json: bool,
) -> anyhow::Result<()> {
    let text = TextHud::from_config(&config);
    let outlines = MarkerOutlines::new();
    let mut hub = TickScheduler::new(config)?;

    let mut session = Session::start(12_800, "Alex", &[("Steve", DVec3::new(20.0, 64.0, 20.0))]);
    let mut roster = PlayerList::new();
    roster.set_latency(session.observer.id, 42);
    hub.on_join_world(session.world.world_id());

    println!("Simulating {ticks} ticks (world switch at {switch_at})");
    for t in 1..=ticks {
        if t == switch_at {
            tracing::info!(tick = t, "switching world");
            roster.remove(session.observer.id);
            session = Session::start(1_000, "Sam", &[]);
            roster.set_latency(session.observer.id, 57);
        }
        session.step();

        // Press the toggle for a few ticks at 30, release, press again at 90.
        let key_down = (30..33).contains(&t) || (90..92).contains(&t);
        let input = TickInput::in_world(&session.world, session.observer)
            .with_roster(&roster)
            .with_fps(60)
            .with_toggle_key(key_down);
        hub.tick(input);

        for event in hub.drain_events() {
            println!("[t={t:>4}] {event}");
        }
        if !json && t % every == 0 {
            let view = HudView {
                camera: session.observer.position,
                debug_overlay_visible: false,
            };
            println!("[t={t:>4}] --");
            for line in text.render(hub.state(), &view) {
                println!("         {line}");
            }
            let boxes = outlines.render(hub.state(), &view);
            if !boxes.is_empty() {
                println!("         outlines: {}", boxes.len());
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&hub.snapshot())?);
    }
    Ok(())
}

fn run_scan(config: &EngineConfig, size: i32, lights: i32, json: bool) -> anyhow::Result<()> {
    let size = size.max(1);
    let mut world = World::default();
    world.set_ambient_sky_light(0);
    // Gentle terraces so the vertical window matters.
    for x in -size..=size {
        for z in -size..=size {
            let y = 60 + (x.abs() + z.abs()) / 6;
            world.set_block(BlockPos::new(x, y, z), BlockInfo::SOLID);
            if lights > 0 && x.rem_euclid(lights) == 0 && z.rem_euclid(lights) == 0 {
                world.set_block_light(BlockPos::new(x, y + 1, z), 14);
            }
        }
    }
    println!("Generated terrain: {} blocks", world.block_count());

    let center = BlockPos::new(0, 61, 0);
    let result = scan(&world, center, &config.scan, &DarkSolidGround);
    if json {
        println!("{}", serde_json::to_string_pretty(&result.markers)?);
    } else {
        println!(
            "Scan at ({}, {}, {}): markers={}, examined={}, capped={}",
            center.x,
            center.y,
            center.z,
            result.markers.len(),
            result.examined,
            result.capped
        );
    }
    Ok(())
}
