//! colony — end-to-end demo of the reunion director.
//!
//! Runs a toy colony for a few in-game months.  Former allies scattered in
//! the world are picked up by the reconciliation scan, then come back one
//! at a time as wanderers, pod crashes, and quest rewards.  Colonists lost
//! along the way go back into the pool.  The run ends with a save, a
//! reload into a fresh session, and a CSV roster export.
//!
//! Settings come from the JSON file given as the first argument, or from
//! `REUNION_*` environment variables.  `RUST_LOG=reunion=info,ru_=debug`
//! shows the director's internals.

mod colony;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ru_core::{SimRng, TICKS_PER_DAY, Tick};
use ru_persist::{CsvRosterWriter, JsonFileAdapter, load_session, save_session};
use ru_pool::Agent;
use ru_session::{ReconcileScan, SessionBuilder, Settings};

use colony::Colony;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const SIM_DAYS:          u64 = 120;
const TICKS_PER_HOUR:    u64 = TICKS_PER_DAY / 24;
const ROSTER_EVERY_DAYS: u64 = 30;
const LOSS_EVERY_DAYS:   u64 = 25;
/// Days during which the colony has no home map (caravan trip).
const NOMAD_DAYS:        std::ops::Range<u64> = 70..74;
const OUTPUT_DIR:        &str = "output/colony";

fn years(n: i64) -> i64 {
    n * 60 * TICKS_PER_DAY as i64
}

fn marked(id: &str, name: &str, age_years: i64) -> Agent {
    let mut agent = Agent::new(id, name, years(age_years));
    agent.marked = true;
    agent
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reunion=info")))
        .with_target(false)
        .compact()
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::from_env(),
    };

    println!("=== colony — reunion director demo ===");
    println!(
        "Days: {SIM_DAYS}  |  Seed: {SEED}  |  Interval: {}-{} days",
        settings.min_days_between_events, settings.max_days_between_events
    );
    println!();

    // 1. Starting colony.  Bo is a former ally the player already has.
    let colony = Colony::new(vec![
        Agent::new("c-1", "Ada", years(31)),
        marked("c-2", "Bo", 27),
    ]);

    let mut session = SessionBuilder::new(colony, SimRng::new(SEED))
        .settings(settings)
        .start_tick(Tick::ZERO)
        .build()?;
    session.init_new_game();

    // 2. Reconciliation scan over the new world.
    let world = vec![
        marked("w-1", "Cass", 22),
        marked("w-2", "Dmitri", 45),
        marked("w-3", "Edda", 38),
        marked("w-4", "Fenn", 19),
        Agent::new("w-5", "Stranger", years(50)),
    ];
    let mut players = std::mem::take(&mut session.host.colonists);
    let report = session.reconcile(ReconcileScan { player_agents: &mut players, world_agents: world });
    session.host.colonists = players;
    println!(
        "Reconcile: {} recorded, {} admitted, {} left in world",
        report.recorded.len(),
        report.admitted.len(),
        report.left_in_world.len()
    );

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut roster = CsvRosterWriter::new(&Path::new(OUTPUT_DIR).join("roster.csv"))?;
    roster.write_roster(session.now(), session.pool())?;

    // 3. Run.
    let mut colony_rng = SimRng::new(SEED ^ 0xC0_10_4E);
    let mut events_fired = 0usize;
    let t0 = Instant::now();

    for day in 1..=SIM_DAYS {
        session.host.day = day;
        session.host.has_map = !NOMAD_DAYS.contains(&day);

        for hour in 0..24 {
            let now = Tick((day - 1) * TICKS_PER_DAY + hour * TICKS_PER_HOUR);
            match session.on_tick(now) {
                Some(Ok(_)) => events_fired += 1,
                Some(Err(err)) => tracing::debug!(day, %err, "dispatch declined"),
                None => {}
            }
        }

        // The player answers quest offers the morning after.
        if let Some(agent) = session.host.take_quest_offer() {
            if colony_rng.gen_bool(0.6) {
                let id = agent.id.clone();
                session.host.colonists.push(agent);
                session.on_agent_recruited(&id);
            } else {
                session.return_agent(agent)?;
            }
        }

        // Now and then a returned ally is lost again (kidnapped, wandered off).
        if day % LOSS_EVERY_DAYS == 0 {
            let lost = session
                .host
                .colonists
                .iter()
                .find(|a| session.pool().is_dispatched(&a.id))
                .map(|a| a.id.clone());
            if let Some(agent) = lost.and_then(|id| session.host.take_colonist(&id)) {
                session.return_agent(agent)?;
            }
        }

        if day % ROSTER_EVERY_DAYS == 0 {
            roster.write_roster(session.now(), session.pool())?;
        }
    }
    roster.finish()?;
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  events fired        : {events_fired}");
    println!("  colonists at end    : {}", session.host.colonists.len());
    println!("  {}", session.roster_line());
    println!("  {}", session.time_remaining_message());
    println!();

    // 4. Save, then reload into a fresh session.
    let mut adapter = JsonFileAdapter::new(Path::new(OUTPUT_DIR).join("reunion.json"));
    save_session(&session, &mut adapter)?;

    let end = session.now();
    let mut reloaded = SessionBuilder::new(Colony::new(Vec::new()), SimRng::new(SEED))
        .settings(session.settings().clone())
        .start_tick(end)
        .build()?;
    load_session(&mut reloaded, &mut adapter)?;
    println!(
        "Reloaded from {}: {} available, {} dispatched",
        adapter.path().display(),
        reloaded.pool().count(),
        reloaded.pool().dispatched_count()
    );
    println!();

    // 5. Arrivals table.
    println!("{:<6} {:<12} {:<16} {:<8}", "Day", "Name", "Event", "Arrival");
    println!("{}", "-".repeat(44));
    for (day, name, arrival) in &session.host.arrivals {
        println!("{:<6} {:<12} {:<16} {:<8}", day, name, arrival.kind.as_str(), format!("{:?}", arrival.style));
    }

    Ok(())
}
