#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::geometry;
    use crate::state::GameStateSnapshot;
    use crate::types::{FieldSize, Hitbox, Position, SimTime};

    // ---- Hitbox overlap ----

    #[test]
    fn test_hitbox_overlap_symmetric() {
        let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);
        let b = Hitbox::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Hitbox::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
        assert!(!far.overlaps(&a));
    }

    #[test]
    fn test_hitbox_edge_touch_is_not_overlap() {
        let a = Hitbox::new(0.0, 0.0, 10.0, 10.0);
        // Shares only the x = 10 edge.
        let right = Hitbox::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!right.overlaps(&a));
        // Shares only the y = 10 edge.
        let below = Hitbox::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));
        // A sliver of actual overlap does count.
        let nudged = Hitbox::new(9.999, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&nudged));
    }

    #[test]
    fn test_hitbox_contained_overlaps() {
        let outer = Hitbox::new(0.0, 0.0, 100.0, 100.0);
        let inner = Hitbox::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_hitbox_padded() {
        let hb = Hitbox::new(3.0, 4.0, 10.0, 20.0);
        let draw = hb.padded();
        assert_eq!(draw.x, 3.0);
        assert_eq!(draw.y, 4.0);
        assert_eq!(draw.width, 10.0 + HITBOX_DRAW_PADDING);
        assert_eq!(draw.height, 20.0 + HITBOX_DRAW_PADDING);
    }

    // ---- Direction dispatch ----

    #[test]
    fn test_direction_velocity_table() {
        let v = Direction::Up.velocity(3.0);
        assert_eq!((v.dx, v.dy), (0.0, -3.0));
        let v = Direction::Down.velocity(3.0);
        assert_eq!((v.dx, v.dy), (0.0, 3.0));
        let v = Direction::Left.velocity(1.0);
        assert_eq!((v.dx, v.dy), (-1.0, 0.0));
        let v = Direction::Right.velocity(1.0);
        assert_eq!((v.dx, v.dy), (1.0, 0.0));
    }

    #[test]
    fn test_direction_default_is_up() {
        assert_eq!(Direction::default(), Direction::Up);
    }

    // ---- Weapon geometry ----

    #[test]
    fn test_weapon_rect_four_distinct_geometries() {
        let body = Position::new(370.0, 270.0);
        let rects: Vec<Hitbox> = Direction::ALL
            .iter()
            .map(|&d| geometry::weapon_rect(body, d))
            .collect();
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                assert_ne!(rects[i], rects[j], "facings {i} and {j} share geometry");
            }
        }
    }

    #[test]
    fn test_weapon_rect_flush_and_centered() {
        let body = Position::new(370.0, 270.0);
        let body_hb = geometry::body_hitbox(body);

        let up = geometry::weapon_rect(body, Direction::Up);
        assert_eq!(up.y + up.height, body_hb.y, "Up bar ends at the body top");
        assert_eq!(up.width, WEAPON_THICKNESS);
        assert_eq!(up.height, WEAPON_LENGTH);
        // Centered on the perpendicular (x) axis.
        let left_gap = up.x - body_hb.x;
        let right_gap = (body_hb.x + TURRET_SIZE) - (up.x + up.width);
        assert_eq!(left_gap, right_gap);

        let right = geometry::weapon_rect(body, Direction::Right);
        assert_eq!(right.x, body_hb.x + TURRET_SIZE, "Right bar starts at the body edge");
        assert_eq!(right.width, WEAPON_LENGTH);
        assert_eq!(right.height, WEAPON_THICKNESS);
        let top_gap = right.y - body_hb.y;
        let bottom_gap = (body_hb.y + TURRET_SIZE) - (right.y + right.height);
        assert_eq!(top_gap, bottom_gap);
    }

    #[test]
    fn test_muzzle_centered_on_bar() {
        let body = Position::new(370.0, 270.0);
        let weapon = geometry::weapon_rect(body, Direction::Up);
        let muzzle = geometry::muzzle_position(&weapon, Direction::Up);
        // Projectile centered on the bar's thickness, leaving the muzzle end.
        assert_eq!(
            muzzle.x - weapon.x,
            (weapon.x + weapon.width) - (muzzle.x + PROJECTILE_SIZE)
        );
        assert!(muzzle.y < weapon.y);
    }

    // ---- Field placement ----

    #[test]
    fn test_field_centered_turret() {
        let field = FieldSize::new(800.0, 600.0);
        let pos = field.centered(TURRET_SIZE);
        assert_eq!((pos.x, pos.y), (370.0, 270.0));
    }

    #[test]
    fn test_field_fully_outside() {
        let field = FieldSize::new(800.0, 600.0);
        let inside = Hitbox::new(100.0, 100.0, 5.0, 5.0);
        assert!(!field.fully_outside(&inside, 20.0));
        // Straddling the edge is still inside.
        let straddle = Hitbox::new(-2.0, 100.0, 5.0, 5.0);
        assert!(!field.fully_outside(&straddle, 20.0));
        let gone = Hitbox::new(-30.0, 100.0, 5.0, 5.0);
        assert!(field.fully_outside(&gone, 20.0));
        let below = Hitbox::new(100.0, 625.0, 5.0, 5.0);
        assert!(field.fully_outside(&below, 20.0));
    }

    // ---- Time ----

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Face {
                direction: Direction::Left,
            },
            PlayerCommand::Fire,
            PlayerCommand::Reload,
            PlayerCommand::Start,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired { remaining_ammo: 2 },
            GameEvent::WeaponReloaded,
            GameEvent::AdversarySpawned {
                seq: 7,
                direction: Direction::Down,
            },
            GameEvent::AdversaryDestroyed {
                seq: 7,
                projectile_seq: 3,
            },
            GameEvent::GameOver {
                cause: GameOverCause::BodyContact,
                tick: 1200,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_direction_serde() {
        for d in Direction::ALL {
            let json = serde_json::to_string(&d).unwrap();
            let back: Direction = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }
}
