#[cfg(test)]
mod tests {
    use crate::commands::RaidCommand;
    use crate::definitions::*;
    use crate::enums::*;
    use crate::events::RaidEvent;
    use crate::state::{RaidSnapshot, SessionStats};
    use crate::types::*;

    #[test]
    fn test_agent_state_serde() {
        let variants = vec![
            AgentState::Idle,
            AgentState::Tracking,
            AgentState::Strafing,
            AgentState::Retreating,
            AgentState::Dead,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AgentState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_end_reason_serde() {
        let variants = vec![
            EndReason::Victory,
            EndReason::TimeExpired,
            EndReason::AllPlayersLeft,
            EndReason::Admin,
            EndReason::Shutdown,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EndReason = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_tagged_serde() {
        let cmd = RaidCommand::EndSession {
            session: SessionId(3),
            reason: EndReason::Admin,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"EndSession\""));
        let back: RaidCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);

        let join: RaidCommand = serde_json::from_str(r#"{"type":"Join","player":7}"#).unwrap();
        assert_eq!(join, RaidCommand::Join { player: PlayerId(7) });
    }

    #[test]
    fn test_event_tagged_serde() {
        let event = RaidEvent::SessionEnded {
            session: SessionId(1),
            reason: EndReason::Victory,
            stats: SessionStats {
                wave: 10,
                kills: 42,
                score: 1210,
                ..Default::default()
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"SessionEnded\""));
        let back: RaidEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = RaidSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: RaidSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    // ---- Geometry ----

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-9);
        assert!((a.horizontal_range_to(&Position::new(3.0, 4.0, 12.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = Position::default();
        let north = origin.bearing_to(&Position::new(0.0, 10.0, 0.0));
        let east = origin.bearing_to(&Position::new(10.0, 0.0, 0.0));
        let west = origin.bearing_to(&Position::new(-10.0, 0.0, 0.0));
        assert!(north.abs() < 1e-9);
        assert!((east - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
        assert!((west - 3.0 * std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..20 {
            t.advance();
        }
        assert_eq!(t.tick, 20);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
        assert_eq!(secs_to_ticks(5), 100);
        assert_eq!(ticks_to_secs(119), 5);
    }

    #[test]
    fn test_ids_display() {
        assert_eq!(PlayerId(4).to_string(), "player-4");
        assert_eq!(SessionId(2).to_string(), "raid-2");
    }

    // ---- Wave scaling ----

    #[test]
    fn test_scaled_wave_one() {
        let wave = WaveDefinition::new(1, vec![MobSpec::new("zombie", 5, 20.0, 2.0)], 1.0);
        let scaled = wave.scaled_composition();
        assert_eq!(scaled.len(), 1);
        assert!((scaled[0].health - 23.0).abs() < 1e-9);
        assert!((scaled[0].damage - 2.2).abs() < 1e-9);
        assert!((scaled[0].speed - 1.0).abs() < 1e-9);
        assert_eq!(scaled[0].amount, 5);
    }

    #[test]
    fn test_scaling_strictly_increasing() {
        for difficulty in [0.5, 1.0, 1.8] {
            for n in 1..60 {
                assert!(scale_health(n + 1, 20.0, difficulty) > scale_health(n, 20.0, difficulty));
                assert!(scale_damage(n + 1, 2.0, difficulty) > scale_damage(n, 2.0, difficulty));
            }
        }
    }

    #[test]
    fn test_speed_bonus_tiers() {
        assert_eq!(speed_bonus(1), 0.0);
        assert_eq!(speed_bonus(9), 0.0);
        assert_eq!(speed_bonus(10), 0.10);
        assert_eq!(speed_bonus(20), 0.20);
        assert_eq!(speed_bonus(29), 0.20);
        assert_eq!(speed_bonus(30), 0.30);
        assert!((scale_speed(30, 1.0) - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_wave_definition_defaults() {
        let wave: WaveDefinition =
            serde_json::from_str(r#"{"id": 4, "mobs": [{"amount": 3}]}"#).unwrap();
        assert_eq!(wave.max_duration, 90);
        assert_eq!(wave.difficulty, 1.0);
        assert!(!wave.has_boss);
        let mob = &wave.mobs[0];
        assert_eq!(mob.mob_type, "zombie");
        assert_eq!(mob.amount, 3);
        assert_eq!(mob.health, 20.0);
        assert_eq!(mob.damage, 2.0);
        assert_eq!(mob.speed, 1.0);
    }

    // ---- Arena ----

    fn arena() -> Arena {
        Arena {
            name: "pit".into(),
            world: "world".into(),
            spawn: Position::new(100.0, 100.0, 64.0),
            center: Position::new(100.0, 100.0, 64.0),
            mob_spawns: vec![Position::new(110.0, 100.0, 64.0)],
            max_players: 10,
            available: true,
        }
    }

    #[test]
    fn test_arena_contains() {
        let a = arena();
        assert!(a.contains(&Location::new("world", Position::new(150.0, 100.0, 64.0))));
        assert!(!a.contains(&Location::new("world", Position::new(250.0, 100.0, 64.0))));
        assert!(!a.contains(&Location::new("nether", Position::new(100.0, 100.0, 64.0))));
    }

    #[test]
    fn test_arena_available_defaults_true() {
        let json = r#"{
            "name": "pit", "world": "world",
            "spawn": {"x": 0.0, "y": 0.0, "z": 64.0},
            "center": {"x": 0.0, "y": 0.0, "z": 64.0},
            "mob_spawns": [{"x": 5.0, "y": 0.0, "z": 64.0}]
        }"#;
        let a: Arena = serde_json::from_str(json).unwrap();
        assert!(a.available);
        assert_eq!(a.max_players, 10);
    }
}
