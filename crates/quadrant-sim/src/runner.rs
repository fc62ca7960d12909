//! Real-time loop runner: drives the engine at the tick rate on a
//! dedicated thread and hands each snapshot to the injected render sink.
//!
//! Commands arrive via `mpsc` channel. Snapshots are delivered through the
//! `on_snapshot` callback and stored in shared state for synchronous
//! polling. The loop only reschedules itself while the session is alive:
//! once the engine reports GameOver the thread exits (unless the config
//! keeps the spawn cadence running past GameOver).

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use quadrant_core::commands::PlayerCommand;
use quadrant_core::constants::TICK_RATE;
use quadrant_core::enums::GamePhase;
use quadrant_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands accepted by the loop thread.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    /// Forward a player command to the engine.
    Player(PlayerCommand),
    /// Stop the loop and exit the thread.
    Shutdown,
}

/// Spawns the simulation loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_sim_loop<F>(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    on_snapshot: F,
) -> mpsc::Sender<LoopCommand>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("quadrant-sim-loop".into())
        .spawn(move || {
            run_sim_loop(config, cmd_rx, &latest_snapshot, on_snapshot);
        })
        .expect("Failed to spawn simulation loop thread");

    cmd_tx
}

/// The simulation loop. Runs until GameOver, Shutdown command, or channel
/// disconnect.
fn run_sim_loop<F>(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut on_snapshot: F,
) where
    F: FnMut(&GameStateSnapshot),
{
    let keep_spawning = config.spawn_after_game_over;
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the render sink
        on_snapshot(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. The frame chain ends with the session
        if engine.phase() == GamePhase::GameOver && !keep_spawning {
            return;
        }

        // 6. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Player(PlayerCommand::Start)).unwrap();
        tx.send(LoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Player(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Player(PlayerCommand::Fire)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_exits_on_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_sim_loop(SimConfig::default(), Arc::clone(&latest), |_| {});

        tx.send(LoopCommand::Shutdown).unwrap();

        // The thread drains the channel at the top of each iteration, so
        // the sender eventually disconnects once the thread is gone.
        for _ in 0..200 {
            std::thread::sleep(Duration::from_millis(5));
            if tx.send(LoopCommand::Player(PlayerCommand::Reload)).is_err() {
                return;
            }
        }
        panic!("Loop thread did not exit after Shutdown");
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_sim_loop(SimConfig::default(), Arc::clone(&latest), |_| {});
        tx.send(LoopCommand::Player(PlayerCommand::Start)).unwrap();

        let mut seen_running = false;
        for _ in 0..200 {
            std::thread::sleep(Duration::from_millis(5));
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if snap.phase == GamePhase::Running && snap.time.tick > 0 {
                    seen_running = true;
                    break;
                }
            }
        }
        let _ = tx.send(LoopCommand::Shutdown);
        assert!(seen_running, "Loop never published a running snapshot");
    }
}
