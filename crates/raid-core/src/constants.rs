//! Simulation constants and tuning parameters.

/// Host tick rate (Hz). Agents step once per host tick.
pub const TICK_RATE: u32 = 20;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Session defaults ---

/// Host ticks between orchestrator session passes (once per second).
pub const SESSION_TICK_INTERVAL: u64 = 20;

/// Total time budget of a raid in seconds (30 minutes).
pub const DEFAULT_TOTAL_TIME_SECS: u32 = 1800;

/// Grace delay between session creation and the first wave (5 seconds).
pub const JOIN_GRACE_TICKS: u64 = 100;

/// Break between a completed wave and the next one, in seconds.
pub const WAVE_BREAK_SECS: u32 = 10;

/// Seconds a dead raider waits before respawning.
pub const RESPAWN_COOLDOWN_SECS: u32 = 5;

/// Radius around an arena center that counts as "inside" the arena.
pub const ARENA_RADIUS: f64 = 100.0;

/// Default roster capacity of an arena.
pub const DEFAULT_ARENA_CAPACITY: u32 = 10;

// --- Wave scaling ---

/// Health growth per wave id (+15% per wave).
pub const HEALTH_SCALE_PER_WAVE: f64 = 0.15;

/// Damage growth per wave id (+10% per wave).
pub const DAMAGE_SCALE_PER_WAVE: f64 = 0.10;

/// Speed bonus tiers: (minimum wave id, bonus), highest first.
pub const SPEED_BONUS_TIERS: [(u32, f64); 3] = [(30, 0.30), (20, 0.20), (10, 0.10)];

// --- Spawning ---

/// Non-boss mobs per progressive spawn group.
pub const SPAWN_GROUP_SIZE: u32 = 3;

/// Default delay between progressive spawn groups (one second).
pub const SPAWN_GROUP_DELAY_TICKS: u64 = 20;

/// Horizontal jitter step applied around a mob spawn point.
pub const SPAWN_JITTER: f64 = 0.5;

// --- Agent movement ---

/// Base movement speed of a regular mob (blocks per tick).
pub const MOB_MOVE_SPEED: f64 = 0.35;

/// Base movement speed of a boss (blocks per tick).
pub const BOSS_MOVE_SPEED: f64 = 0.4;

/// Per-tick horizontal friction applied to agent motion.
pub const GROUND_FRICTION: f64 = 0.6;

/// Per-tick downward acceleration applied to airborne agents.
pub const GRAVITY: f64 = 0.08;

// --- Agent targeting ---

/// Distance beyond which a target is dropped and no new target is acquired.
pub const LEASH_RANGE: f64 = 30.0;

/// Distance at or under which an agent fights in melee.
pub const MELEE_RANGE: f64 = 3.5;

/// Distance at or under which an agent chases its target.
pub const CHASE_RANGE: f64 = 20.0;

/// Chase distance beyond which the agent sprints.
pub const SPRINT_RANGE: f64 = 8.0;

// --- Agent behavior ---

/// Health fraction under which a non-boss agent retreats.
pub const RETREAT_HEALTH_FRACTION: f64 = 0.3;

/// Duration of a retreat in ticks.
pub const RETREAT_TICKS: u32 = 40;

/// Speed factor applied while retreating.
pub const RETREAT_SPEED_FACTOR: f64 = 0.7;

/// Ticks a strafe direction is held before being redrawn.
pub const STRAFE_REDRAW_TICKS: u32 = 20;

/// Per-tick chance of jumping in melee when the jump cooldown is ready.
pub const JUMP_CHANCE: f64 = 0.30;

/// Jump cooldown in ticks.
pub const JUMP_COOLDOWN_TICKS: u32 = 20;

/// Vertical impulse of a jump.
pub const JUMP_IMPULSE: f64 = 0.42;

/// Per-tick chance an idle agent picks a new wander heading.
pub const IDLE_WANDER_CHANCE: f64 = 0.05;

/// Drift speed of an idle wander.
pub const IDLE_WANDER_SPEED: f64 = 0.1;

// --- Attack resolution ---

/// Chance of a critical hit for types that allow them.
pub const CRIT_CHANCE: f64 = 0.15;

/// Damage multiplier of a critical hit.
pub const CRIT_MULTIPLIER: f64 = 1.5;

/// Consecutive hits that must be exceeded before the combo bonus applies.
pub const COMBO_THRESHOLD: u32 = 2;

/// Damage multiplier once the combo threshold is exceeded.
pub const COMBO_MULTIPLIER: f64 = 1.10;

/// The combo resets once more than this many ticks pass without a hit (3 s).
pub const COMBO_WINDOW_TICKS: u64 = 3 * TICK_RATE as u64;

/// Horizontal knockback magnitude applied to a hit player.
pub const KNOCKBACK_HORIZONTAL: f64 = 0.4;

/// Vertical knockback applied to a hit player.
pub const KNOCKBACK_VERTICAL: f64 = 0.35;

// --- Display ---

/// Segments in an agent's health bar.
pub const HEALTH_BAR_SEGMENTS: u8 = 10;

/// Health fraction under which the bar is shown as critical.
pub const HEALTH_CRITICAL_FRACTION: f64 = 0.3;

/// Health fraction under which the bar is shown as a warning.
pub const HEALTH_WARNING_FRACTION: f64 = 0.6;

// --- Scoring ---

pub const SCORE_PER_WAVE: i64 = 100;
pub const SCORE_PER_KILL: i64 = 5;
pub const SCORE_PER_REMAINING_SEC: i64 = 2;
pub const SCORE_PENALTY_PER_DEATH: i64 = 20;

// --- Long-term stats ---

/// Rating every player starts from.
pub const BASE_ELO: i32 = 1000;

/// Rating awarded to the players of the top three leaderboard entries.
pub const ELO_PODIUM_AWARDS: [i32; 3] = [20, 10, 5];

/// Maximum entries kept on the score leaderboard.
pub const LEADERBOARD_CAPACITY: usize = 100;
