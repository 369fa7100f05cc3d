#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use raid_core::components::{AgentBrain, Facing};
    use raid_core::constants::*;
    use raid_core::enums::{AgentState, HealthBand};
    use raid_core::types::{PlayerId, Position};

    use crate::combat::{expire_combo, knockback, register_hit, resolve_attack};
    use crate::display::{health_bar, name_tag};
    use crate::fsm::{evaluate, AgentContext, AgentUpdate};
    use crate::profiles::{get_profile, MobProfile};
    use crate::targeting::{acquire_target, Candidate};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn player(id: u32, x: f64, y: f64) -> Candidate {
        Candidate {
            id: PlayerId(id),
            position: Position::new(x, y, 64.0),
            online: true,
            alive: true,
            spectator: false,
        }
    }

    struct Agent {
        mob_type: &'static str,
        is_boss: bool,
        health: f64,
        brain: AgentBrain,
    }

    impl Agent {
        fn new(mob_type: &'static str) -> Self {
            Self {
                mob_type,
                is_boss: false,
                health: 100.0,
                brain: AgentBrain::default(),
            }
        }

        fn step(&mut self, candidates: &[Candidate], tick: u64, rng: &mut ChaCha8Rng) -> AgentUpdate {
            let ctx = AgentContext {
                mob_type: self.mob_type,
                is_boss: self.is_boss,
                position: Position::new(0.0, 0.0, 64.0),
                facing: Facing::default(),
                health: self.health,
                max_health: 100.0,
                damage: 4.0,
                speed: 1.0,
                now_tick: tick,
                brain: &self.brain,
                candidates,
            };
            let update = evaluate(&ctx, rng);
            self.brain = update.brain.clone();
            update
        }
    }

    // ---- Targeting ----

    #[test]
    fn test_acquire_nearest_within_leash() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let candidates = [player(1, 20.0, 0.0), player(2, 0.0, 12.0), player(3, 40.0, 0.0)];
        let picked = acquire_target(&origin, None, &candidates).unwrap();
        assert_eq!(picked.id, PlayerId(2));
    }

    #[test]
    fn test_acquire_tie_goes_to_first() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let candidates = [player(5, 10.0, 0.0), player(6, -10.0, 0.0)];
        assert_eq!(acquire_target(&origin, None, &candidates).unwrap().id, PlayerId(5));
    }

    #[test]
    fn test_acquire_leash_is_strict() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let candidates = [player(1, LEASH_RANGE, 0.0)];
        assert!(acquire_target(&origin, None, &candidates).is_none());
    }

    #[test]
    fn test_acquire_skips_dead_and_spectators() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let mut dead = player(1, 2.0, 0.0);
        dead.alive = false;
        let mut watcher = player(2, 3.0, 0.0);
        watcher.spectator = true;
        let candidates = [dead, watcher, player(3, 15.0, 0.0)];
        assert_eq!(acquire_target(&origin, None, &candidates).unwrap().id, PlayerId(3));
    }

    #[test]
    fn test_current_target_kept_over_closer_player() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let candidates = [player(1, 2.0, 0.0), player(2, 25.0, 0.0)];
        let picked = acquire_target(&origin, Some(PlayerId(2)), &candidates).unwrap();
        assert_eq!(picked.id, PlayerId(2));
    }

    #[test]
    fn test_current_target_dropped_when_invalid() {
        let origin = Position::new(0.0, 0.0, 64.0);
        let mut gone = player(2, 5.0, 0.0);
        gone.online = false;
        let candidates = [player(1, 10.0, 0.0), gone];
        assert_eq!(
            acquire_target(&origin, Some(PlayerId(2)), &candidates).unwrap().id,
            PlayerId(1)
        );

        let far = [player(2, 35.0, 0.0)];
        assert!(acquire_target(&origin, Some(PlayerId(2)), &far).is_none());
    }

    // ---- FSM ----

    #[test]
    fn test_idle_without_players() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();
        let mut wandered = 0;
        for tick in 0..1000 {
            let update = agent.step(&[], tick, &mut rng);
            assert_eq!(update.brain.state, AgentState::Idle);
            assert!(update.attack.is_none());
            if let Some(motion) = update.motion {
                wandered += 1;
                assert!((motion.horizontal_speed() - IDLE_WANDER_SPEED).abs() < 1e-9);
            }
        }
        // 5% per tick over 1000 ticks
        assert!(wandered > 20 && wandered < 90, "wandered {wandered} times");
    }

    #[test]
    fn test_chase_and_sprint() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();

        let update = agent.step(&[player(1, 0.0, 12.0)], 0, &mut rng);
        assert_eq!(update.brain.state, AgentState::Tracking);
        assert_eq!(update.brain.target, Some(PlayerId(1)));
        assert!(update.brain.sprinting);
        let motion = update.motion.unwrap();
        assert!(motion.x.abs() < 1e-9);
        assert!((motion.y - MOB_MOVE_SPEED).abs() < 1e-9);

        let update = agent.step(&[player(1, 0.0, 6.0)], 1, &mut rng);
        assert!(!update.brain.sprinting);
        assert!(update.motion.is_some());
    }

    #[test]
    fn test_tracking_beyond_chase_range_holds_position() {
        let mut agent = Agent::new("zombie");
        let update = agent.step(&[player(1, 25.0, 0.0)], 0, &mut rng());
        assert_eq!(update.brain.state, AgentState::Tracking);
        assert!(update.motion.is_none());
        assert!(update.attack.is_none());
    }

    #[test]
    fn test_melee_attack_cadence() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();
        let target = [player(1, 2.0, 0.0)];
        let mut attack_ticks = Vec::new();
        for tick in 0..25 {
            let update = agent.step(&target, tick, &mut rng);
            assert_eq!(update.brain.state, AgentState::Tracking);
            if let Some(intent) = update.attack {
                assert_eq!(intent.target, PlayerId(1));
                assert!(intent.roll.damage == 4.0 || intent.roll.damage == 6.0);
                attack_ticks.push(tick);
            }
        }
        let speed = get_profile("zombie").attack_speed_ticks as u64;
        assert_eq!(attack_ticks, vec![0, speed, 2 * speed]);
    }

    #[test]
    fn test_strafing_types_redraw_direction() {
        let mut agent = Agent::new("skeleton");
        let mut rng = rng();
        let target = [player(1, 0.0, 3.0)];
        let mut directions = std::collections::BTreeSet::new();
        for tick in 0..400 {
            let update = agent.step(&target, tick, &mut rng);
            assert_eq!(update.brain.state, AgentState::Strafing);
            assert!((-1..=1).contains(&update.brain.strafe_direction));
            assert!(update.brain.strafe_ticks < STRAFE_REDRAW_TICKS);
            if update.brain.strafe_direction != 0 {
                let motion = update.motion.unwrap();
                // Lateral to a target due north: pure east/west motion.
                assert!(motion.y.abs() < 1e-9);
            }
            directions.insert(update.brain.strafe_direction);
        }
        assert!(directions.len() > 1);
    }

    #[test]
    fn test_jump_respects_cooldown() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();
        let target = [player(1, 2.0, 0.0)];
        let mut last_jump: Option<u64> = None;
        let mut jumps = 0;
        for tick in 0..400 {
            let update = agent.step(&target, tick, &mut rng);
            if update.jump {
                if let Some(last) = last_jump {
                    assert!(tick - last >= JUMP_COOLDOWN_TICKS as u64);
                }
                last_jump = Some(tick);
                jumps += 1;
            }
        }
        assert!(jumps > 5);
    }

    #[test]
    fn test_retreat_lasts_forty_ticks() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();
        let target = [player(1, 0.0, 10.0)];
        agent.step(&target, 0, &mut rng);
        assert_eq!(agent.brain.state, AgentState::Tracking);

        agent.health = 25.0;
        for tick in 1..RETREAT_TICKS as u64 {
            let update = agent.step(&target, tick, &mut rng);
            assert_eq!(update.brain.state, AgentState::Retreating, "tick {tick}");
            let motion = update.motion.unwrap();
            assert!(motion.y < 0.0, "retreat moves away from the target");
            assert!((motion.horizontal_speed() - MOB_MOVE_SPEED * RETREAT_SPEED_FACTOR).abs() < 1e-9);
            let facing = update.facing.unwrap();
            assert!(facing.yaw.abs() < 1e-9, "still facing the target");
        }

        let update = agent.step(&target, RETREAT_TICKS as u64, &mut rng);
        assert_eq!(update.brain.state, AgentState::Tracking);
        assert!(update.state_changed);

        // Still wounded: the next tick retreats again.
        let update = agent.step(&target, RETREAT_TICKS as u64 + 1, &mut rng);
        assert_eq!(update.brain.state, AgentState::Retreating);
        assert!(update.state_changed);
        assert_eq!(update.brain.retreat_ticks, RETREAT_TICKS - 1);
    }

    #[test]
    fn test_wounded_agent_keeps_cycling_retreats() {
        let mut agent = Agent::new("zombie");
        let mut rng = rng();
        let target = [player(1, 0.0, 10.0)];
        agent.health = 25.0;

        let mut entries = 0;
        for tick in 0..(RETREAT_TICKS as u64 * 3) {
            let update = agent.step(&target, tick, &mut rng);
            if update.state_changed && update.brain.state == AgentState::Retreating {
                entries += 1;
            }
        }
        assert_eq!(entries, 3);

        agent.health = 60.0;
        let update = agent.step(&target, RETREAT_TICKS as u64 * 3 + 1, &mut rng);
        assert_ne!(update.brain.state, AgentState::Retreating);
    }

    #[test]
    fn test_boss_never_retreats() {
        let mut agent = Agent::new("zombie_boss");
        agent.is_boss = true;
        agent.health = 5.0;
        let mut rng = rng();
        for tick in 0..60 {
            let update = agent.step(&[player(1, 0.0, 10.0)], tick, &mut rng);
            assert_ne!(update.brain.state, AgentState::Retreating);
            let motion = update.motion.unwrap();
            assert!((motion.y - BOSS_MOVE_SPEED).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dead_is_terminal() {
        let mut agent = Agent::new("zombie");
        agent.health = 0.0;
        let mut rng = rng();
        let update = agent.step(&[player(1, 1.0, 0.0)], 0, &mut rng);
        assert_eq!(update.brain.state, AgentState::Dead);
        assert!(update.state_changed);

        agent.health = 50.0;
        let update = agent.step(&[player(1, 1.0, 0.0)], 1, &mut rng);
        assert_eq!(update.brain.state, AgentState::Dead);
        assert!(update.attack.is_none());
        assert!(update.motion.is_none());
    }

    // ---- Combat ----

    fn no_crit() -> MobProfile {
        MobProfile {
            can_crit: false,
            ..get_profile("zombie")
        }
    }

    #[test]
    fn test_combo_bonus_after_two_hits() {
        let a = Position::new(0.0, 0.0, 64.0);
        let b = Position::new(1.0, 0.0, 64.0);
        let mut rng = rng();
        assert_eq!(resolve_attack(&no_crit(), 10.0, 2, &a, &b, &mut rng).damage, 10.0);
        let boosted = resolve_attack(&no_crit(), 10.0, 3, &a, &b, &mut rng);
        assert!((boosted.damage - 11.0).abs() < 1e-9);
        assert!(!boosted.critical);
    }

    #[test]
    fn test_crit_rate_and_multiplier() {
        let a = Position::new(0.0, 0.0, 64.0);
        let b = Position::new(1.0, 0.0, 64.0);
        let profile = get_profile("zombie");
        let mut rng = rng();
        let mut crits = 0;
        for _ in 0..4000 {
            let roll = resolve_attack(&profile, 10.0, 0, &a, &b, &mut rng);
            if roll.critical {
                crits += 1;
                assert!((roll.damage - 15.0).abs() < 1e-9);
            } else {
                assert_eq!(roll.damage, 10.0);
            }
        }
        let rate = crits as f64 / 4000.0;
        assert!((0.12..0.18).contains(&rate), "crit rate {rate}");
    }

    #[test]
    fn test_knockback_direction() {
        let kb = knockback(&Position::new(0.0, 0.0, 64.0), &Position::new(3.0, 4.0, 64.0));
        assert!((kb.x - 0.24).abs() < 1e-9);
        assert!((kb.y - 0.32).abs() < 1e-9);
        assert!((kb.z - KNOCKBACK_VERTICAL).abs() < 1e-9);
    }

    #[test]
    fn test_combo_window_expiry() {
        let mut brain = AgentBrain::default();
        register_hit(&mut brain, 100);
        register_hit(&mut brain, 110);
        register_hit(&mut brain, 120);
        assert_eq!(brain.combo_hits, 3);

        expire_combo(&mut brain, 120 + COMBO_WINDOW_TICKS);
        assert_eq!(brain.combo_hits, 3);
        expire_combo(&mut brain, 121 + COMBO_WINDOW_TICKS);
        assert_eq!(brain.combo_hits, 0);
    }

    // ---- Profiles & display ----

    #[test]
    fn test_unknown_type_falls_back_to_zombie() {
        assert_eq!(get_profile("dragon"), get_profile("zombie"));
        assert!(get_profile("skeleton").strafe);
        assert!(!get_profile("brute").strafe);
        assert_eq!(get_profile("skeleton_boss").armor_tier, 3);
    }

    #[test]
    fn test_health_bar_bands() {
        assert_eq!(health_bar(100.0, 100.0), (10, HealthBand::Healthy));
        assert_eq!(health_bar(60.0, 100.0), (6, HealthBand::Healthy));
        assert_eq!(health_bar(59.0, 100.0), (5, HealthBand::Warning));
        assert_eq!(health_bar(30.0, 100.0), (3, HealthBand::Warning));
        assert_eq!(health_bar(29.0, 100.0), (2, HealthBand::Critical));
        assert_eq!(health_bar(0.0, 100.0), (0, HealthBand::Critical));
        assert_eq!(health_bar(0.5, 0.5), (10, HealthBand::Healthy));
        assert_eq!(health_bar(0.2, 0.5), (4, HealthBand::Warning));
        assert_eq!(health_bar(5.0, 0.0), (0, HealthBand::Critical));
    }

    #[test]
    fn test_name_tag_segments() {
        let tag = name_tag(&get_profile("spider"), 40.0, 100.0);
        assert!(tag.starts_with("Spider Warrior "));
        assert_eq!(tag.chars().filter(|c| *c == '█').count(), 4);
        assert_eq!(tag.chars().filter(|c| *c == '░').count(), 6);
    }
}
