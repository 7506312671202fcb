//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Match ---

/// Lives at process start and after every player death.
pub const INITIAL_LIFE: u32 = 3;

/// Score at process start and after every player death.
pub const INITIAL_SCORE: u32 = 0;

/// Score awarded for a regular enemy kill.
pub const MINION_KILL_SCORE: u32 = 1;

/// Score awarded for a boss kill.
pub const BOSS_KILL_SCORE: u32 = 100;

/// Damage dealt by one projectile.
pub const PROJECTILE_DAMAGE: u32 = 1;

/// Hit points an enemy loses when it rams the player.
pub const RAM_DAMAGE: u32 = 2;

// --- Timing (seconds) ---

/// Delay between the player's death and the match reset.
pub const RESPAWN_DELAY_SECS: f64 = 2.0;

/// Delay between the boss kill and the next scene.
pub const BOSS_ADVANCE_DELAY_SECS: f64 = 2.0;

/// Delay between level start and the first wave.
pub const WAVE_LEAD_IN_SECS: f64 = 1.0;

// --- Speeds (px/s) ---

/// Straight-line speed of a boss still entering the screen.
pub const BOSS_ENTRY_SPEED: f64 = 50.0;

/// Speed of every projectile.
pub const PROJECTILE_SPEED: f64 = 650.0;

/// Player ship speed.
pub const PLAYER_SPEED: f64 = 250.0;

// --- Screen ---

/// Distance beyond the screen at which entities are destroyed.
pub const OFFSCREEN_MARGIN: f64 = 200.0;

/// Player spawn x coordinate (y is screen centre).
pub const PLAYER_SPAWN_X: f64 = 20.0;

/// Player visual scale.
pub const PLAYER_SCALE: f64 = 1.5;

/// Player hitbox as a fraction of the visual extent.
pub const PLAYER_HITBOX_SCALE: f64 = 0.5;

/// Projectile hitbox as a fraction of the visual extent.
pub const PROJECTILE_HITBOX_SCALE: f64 = 0.2;

/// Muzzle offset from the shooter's centre, as a fraction of its width.
pub const MUZZLE_OFFSET_FACTOR: f64 = 1.0 / 1.5;

/// Explosion effect scale.
pub const EXPLOSION_SCALE: f64 = 2.5;
