//! Two-foot pose bookkeeping.

use crate::core::GridPoint;

/// Which foot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite foot
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Position and heading of one foot
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FootPose {
    pub position: GridPoint,
    /// Heading in radians, measured as `atan2(col, row)`
    pub heading: f64,
}

impl FootPose {
    pub fn new(position: GridPoint, heading: f64) -> Self {
        Self { position, heading }
    }
}

/// Both feet plus which one moves next
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BipedState {
    pub left: FootPose,
    pub right: FootPose,
    swing: Side,
}

impl BipedState {
    pub fn new(left: FootPose, right: FootPose, swing: Side) -> Self {
        Self { left, right, swing }
    }

    /// Side that moves next
    #[inline]
    pub fn swing_side(&self) -> Side {
        self.swing
    }

    #[inline]
    pub fn foot(&self, side: Side) -> &FootPose {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    #[inline]
    pub fn swing_foot(&self) -> &FootPose {
        self.foot(self.swing)
    }

    #[inline]
    pub fn support_foot(&self) -> &FootPose {
        self.foot(self.swing.other())
    }

    /// Place the swing foot and hand the swing role to the other foot
    pub fn commit_step(&mut self, pose: FootPose) {
        match self.swing {
            Side::Left => self.left = pose,
            Side::Right => self.right = pose,
        }
        self.swing = self.swing.other();
    }
}
