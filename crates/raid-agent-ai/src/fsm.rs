//! Combat agent behavior finite state machine.
//!
//! Pure function that computes one tick of an agent's behavior from its
//! brain, stats and the candidates the host reports. No ECS dependency,
//! operates on plain data. Applying motion and hits is up to the caller.

use rand::Rng;
use raid_core::components::{AgentBrain, Facing};
use raid_core::constants::*;
use raid_core::enums::AgentState;
use raid_core::types::{PlayerId, Position, Velocity};

use crate::combat::{self, AttackRoll};
use crate::profiles::{base_move_speed, get_profile, MobProfile};
use crate::steering;
use crate::targeting::{acquire_target, Candidate};

/// Input to the agent FSM for a single entity.
pub struct AgentContext<'a> {
    pub mob_type: &'a str,
    pub is_boss: bool,
    pub position: Position,
    pub facing: Facing,
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    /// Wave speed multiplier.
    pub speed: f64,
    pub now_tick: u64,
    pub brain: &'a AgentBrain,
    /// Players in the agent's world.
    pub candidates: &'a [Candidate],
}

/// An attack the agent wants to land this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackIntent {
    pub target: PlayerId,
    pub roll: AttackRoll,
}

/// Output from the agent FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentUpdate {
    pub brain: AgentBrain,
    /// New horizontal motion, if the agent steers this tick.
    pub motion: Option<Velocity>,
    pub jump: bool,
    pub facing: Option<Facing>,
    pub attack: Option<AttackIntent>,
    pub state_changed: bool,
}

/// Evaluate one tick of behavior for an agent.
pub fn evaluate(ctx: &AgentContext, rng: &mut impl Rng) -> AgentUpdate {
    let mut update = AgentUpdate {
        brain: ctx.brain.clone(),
        motion: None,
        jump: false,
        facing: None,
        attack: None,
        state_changed: false,
    };

    if ctx.brain.state == AgentState::Dead {
        return update;
    }
    if ctx.health <= 0.0 {
        update.brain.state = AgentState::Dead;
        update.brain.target = None;
        update.state_changed = true;
        return update;
    }

    let brain = &mut update.brain;
    brain.attack_cooldown = brain.attack_cooldown.saturating_sub(1);
    brain.jump_cooldown = brain.jump_cooldown.saturating_sub(1);

    let target = acquire_target(&ctx.position, brain.target, ctx.candidates).copied();
    brain.target = target.map(|c| c.id);

    match target {
        None => evaluate_idle(&mut update, rng),
        Some(target) => evaluate_combat(ctx, &target, &mut update, rng),
    }

    update.state_changed = update.brain.state != ctx.brain.state;
    update
}

fn evaluate_idle(update: &mut AgentUpdate, rng: &mut impl Rng) {
    let brain = &mut update.brain;
    brain.state = AgentState::Idle;
    brain.retreat_ticks = 0;
    brain.strafe_ticks = 0;
    brain.sprinting = false;

    if rng.gen_bool(IDLE_WANDER_CHANCE) {
        let heading = rng.gen_range(0.0..std::f64::consts::TAU);
        update.motion = Some(steering::along_heading(heading, IDLE_WANDER_SPEED));
        update.facing = Some(Facing {
            yaw: heading,
            pitch: 0.0,
        });
    }
}

fn evaluate_combat(
    ctx: &AgentContext,
    target: &Candidate,
    update: &mut AgentUpdate,
    rng: &mut impl Rng,
) {
    let profile = get_profile(ctx.mob_type);
    let move_speed = base_move_speed(ctx.is_boss) * ctx.speed;
    let distance = ctx.position.range_to(&target.position);
    let brain = &mut update.brain;

    combat::expire_combo(brain, ctx.now_tick);

    if should_retreat(ctx, brain) {
        brain.state = AgentState::Retreating;
        brain.retreat_ticks = RETREAT_TICKS;
    }

    if brain.state == AgentState::Retreating {
        brain.retreat_ticks = brain.retreat_ticks.saturating_sub(1);
        if brain.retreat_ticks > 0 {
            brain.sprinting = false;
            update.motion = steering::move_away(
                &ctx.position,
                &target.position,
                move_speed * RETREAT_SPEED_FACTOR,
            );
            update.facing = Some(steering::face_toward(&ctx.position, &target.position));
            return;
        }
        brain.state = AgentState::Tracking;
    }

    if distance <= MELEE_RANGE {
        evaluate_melee(ctx, &profile, target, move_speed, update, rng);
    } else {
        let brain = &mut update.brain;
        brain.state = AgentState::Tracking;
        brain.strafe_ticks = 0;
        update.facing = Some(steering::face_toward(&ctx.position, &target.position));
        if distance <= CHASE_RANGE {
            brain.sprinting = distance > SPRINT_RANGE;
            update.motion = steering::move_toward(&ctx.position, &target.position, move_speed);
        }
    }
}

/// Low health, not a boss and not already retreating.
fn should_retreat(ctx: &AgentContext, brain: &AgentBrain) -> bool {
    !ctx.is_boss
        && brain.state != AgentState::Retreating
        && ctx.health < ctx.max_health * RETREAT_HEALTH_FRACTION
}

fn evaluate_melee(
    ctx: &AgentContext,
    profile: &MobProfile,
    target: &Candidate,
    move_speed: f64,
    update: &mut AgentUpdate,
    rng: &mut impl Rng,
) {
    let facing = steering::face_toward(&ctx.position, &target.position);
    update.facing = Some(facing);
    let brain = &mut update.brain;

    if profile.strafe {
        brain.state = AgentState::Strafing;
        brain.strafe_ticks += 1;
        if brain.strafe_ticks >= STRAFE_REDRAW_TICKS {
            brain.strafe_direction = rng.gen_range(-1..=1);
            brain.strafe_ticks = 0;
        }
        update.motion = steering::strafe(facing.yaw, brain.strafe_direction, move_speed);
    } else {
        brain.state = AgentState::Tracking;
    }

    if brain.attack_cooldown == 0 {
        let roll = combat::resolve_attack(
            profile,
            ctx.damage,
            brain.combo_hits,
            &ctx.position,
            &target.position,
            rng,
        );
        update.attack = Some(AttackIntent {
            target: target.id,
            roll,
        });
        brain.attack_cooldown = profile.attack_speed_ticks;
    }

    if brain.jump_cooldown == 0 && rng.gen_bool(JUMP_CHANCE) {
        update.jump = true;
        brain.jump_cooldown = JUMP_COOLDOWN_TICKS;
    }
}
