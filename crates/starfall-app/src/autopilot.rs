//! Demo pilot for the headless binary.
//!
//! Lines the ship up with the nearest enemy and shoots on a fixed cadence.

use starfall_core::commands::PlayerCommand;
use starfall_core::components::InputState;
use starfall_core::state::GameStateSnapshot;

/// Ticks between shots.
const FIRE_EVERY_TICKS: u64 = 12;

/// Vertical slack before the pilot steers (px).
const DEADBAND: f64 = 6.0;

/// Commands for the next tick.
pub fn steer(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let Some(player) = &snapshot.player else {
        return Vec::new();
    };

    let target = snapshot
        .enemies
        .iter()
        .filter(|e| e.position.x > player.position.x)
        .min_by(|a, b| a.position.x.total_cmp(&b.position.x));

    let input = match target {
        Some(enemy) => {
            let dy = enemy.position.y - player.position.y;
            InputState {
                up: dy < -DEADBAND,
                down: dy > DEADBAND,
                ..Default::default()
            }
        }
        None => InputState::default(),
    };

    let mut commands = vec![PlayerCommand::SetInput { input }];
    if target.is_some() && snapshot.time.tick % FIRE_EVERY_TICKS == 0 {
        commands.push(PlayerCommand::Fire);
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_core::enums::{MoveDirection, SpriteTag};
    use starfall_core::state::{EnemyView, PlayerView};
    use starfall_core::types::Position;

    fn snapshot_with_enemy(enemy_y: f64, tick: u64) -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.time.tick = tick;
        snapshot.player = Some(PlayerView {
            position: Position::new(34.0, 250.0),
            sprite: SpriteTag::Player,
            scale: 1.5,
        });
        snapshot.enemies.push(EnemyView {
            position: Position::new(600.0, enemy_y),
            sprite: SpriteTag::MinionOne,
            scale: 1.0,
            hp: 1,
            is_boss: false,
            direction: MoveDirection::Hold,
            pattern: "straight".into(),
            entering: false,
        });
        snapshot
    }

    fn input_of(commands: &[PlayerCommand]) -> InputState {
        match commands.first() {
            Some(PlayerCommand::SetInput { input }) => *input,
            other => panic!("expected SetInput, got {other:?}"),
        }
    }

    #[test]
    fn test_steers_toward_enemy_row() {
        let up = steer(&snapshot_with_enemy(100.0, 1));
        assert!(input_of(&up).up);
        let down = steer(&snapshot_with_enemy(400.0, 1));
        assert!(input_of(&down).down);
        let level = steer(&snapshot_with_enemy(252.0, 1));
        assert_eq!(input_of(&level), InputState::default());
    }

    #[test]
    fn test_fires_on_cadence() {
        assert!(steer(&snapshot_with_enemy(250.0, 24))
            .iter()
            .any(|c| matches!(c, PlayerCommand::Fire)));
        assert!(!steer(&snapshot_with_enemy(250.0, 25))
            .iter()
            .any(|c| matches!(c, PlayerCommand::Fire)));
    }

    #[test]
    fn test_idle_without_player() {
        assert!(steer(&GameStateSnapshot::default()).is_empty());
    }
}
