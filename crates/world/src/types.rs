use glam::Vec2;

/// RGB triple in `[0, 1]`. Presentation only.
pub type Color = [f32; 3];

/// Which side of the chase an agent is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Rewarded for catching prey. Also called adversary.
    Predator,
    /// Penalized for being caught. Also called good agent.
    Prey,
}

impl Role {
    #[must_use]
    pub const fn is_predator(self) -> bool {
        matches!(self, Role::Predator)
    }

    #[must_use]
    pub const fn is_prey(self) -> bool {
        matches!(self, Role::Prey)
    }
}

/// Physical state shared by every entity.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EntityState {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Agent state: physical state plus the communication channel.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Utterance of length `dim_c`. Unused by silent agents but still reset.
    pub comm: Vec<f32>,
}

impl AgentState {
    #[must_use]
    pub fn zeroed(dim_c: usize) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            comm: vec![0.0; dim_c],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Unique within a world.
    pub name: String,
    pub role: Role,
    pub collide: bool,
    pub silent: bool,
    pub movable: bool,
    /// Radius.
    pub size: f32,
    pub accel: f32,
    pub max_speed: f32,
    pub color: Color,
    pub state: AgentState,
}

impl Agent {
    /// Creates a collidable, movable agent at the origin with default presentation.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role, size: f32, dim_c: usize) -> Self {
        Self {
            name: name.into(),
            role,
            collide: true,
            silent: false,
            movable: true,
            size,
            accel: 0.0,
            max_speed: 0.0,
            color: [0.25, 0.25, 0.25],
            state: AgentState::zeroed(dim_c),
        }
    }

    #[must_use]
    pub const fn is_predator(&self) -> bool {
        self.role.is_predator()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Landmark {
    pub name: String,
    pub collide: bool,
    pub movable: bool,
    pub size: f32,
    /// Marks the fixed arena edge. Boundary markers are never moved by resets
    /// and never appear in observations.
    pub boundary: bool,
    pub color: Color,
    pub state: EntityState,
}

impl Landmark {
    /// Creates a collidable, immovable, non-boundary landmark at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, size: f32) -> Self {
        Self {
            name: name.into(),
            collide: true,
            movable: false,
            size,
            boundary: false,
            color: [0.25, 0.25, 0.25],
            state: EntityState::default(),
        }
    }
}
