#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

/// One of the twelve tracked skeletal joints a follower body can bind to.
///
/// The set is closed: two hands plus the ten fingertips. Matching on it is
/// exhaustive, so adding a joint is a compile-visible change everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorJoint {
    Hand(Side),
    Fingertip(Side, Finger),
}

impl AnchorJoint {
    pub const COUNT: usize = 12;

    /// Every joint, ordered by [`AnchorJoint::index`].
    pub const ALL: [AnchorJoint; Self::COUNT] = [
        AnchorJoint::Hand(Side::Left),
        AnchorJoint::Hand(Side::Right),
        AnchorJoint::Fingertip(Side::Left, Finger::Thumb),
        AnchorJoint::Fingertip(Side::Left, Finger::Index),
        AnchorJoint::Fingertip(Side::Left, Finger::Middle),
        AnchorJoint::Fingertip(Side::Left, Finger::Ring),
        AnchorJoint::Fingertip(Side::Left, Finger::Little),
        AnchorJoint::Fingertip(Side::Right, Finger::Thumb),
        AnchorJoint::Fingertip(Side::Right, Finger::Index),
        AnchorJoint::Fingertip(Side::Right, Finger::Middle),
        AnchorJoint::Fingertip(Side::Right, Finger::Ring),
        AnchorJoint::Fingertip(Side::Right, Finger::Little),
    ];

    /// Dense index in `0..COUNT`, stable across a session.
    pub fn index(self) -> usize {
        match self {
            AnchorJoint::Hand(side) => side as usize,
            AnchorJoint::Fingertip(side, finger) => 2 + side as usize * 5 + finger as usize,
        }
    }

    pub fn side(self) -> Side {
        match self {
            AnchorJoint::Hand(side) => side,
            AnchorJoint::Fingertip(side, _) => side,
        }
    }

    pub fn is_hand(self) -> bool {
        matches!(self, AnchorJoint::Hand(_))
    }

    pub fn is_fingertip(self) -> bool {
        matches!(self, AnchorJoint::Fingertip(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_by_index() {
        for (i, joint) in AnchorJoint::ALL.iter().enumerate() {
            assert_eq!(joint.index(), i, "joint {joint:?} out of order");
        }
    }

    #[test]
    fn two_hands_ten_fingertips() {
        let hands = AnchorJoint::ALL.iter().filter(|j| j.is_hand()).count();
        let tips = AnchorJoint::ALL.iter().filter(|j| j.is_fingertip()).count();
        assert_eq!(hands, 2);
        assert_eq!(tips, 10);
    }

    #[test]
    fn sides_split_evenly() {
        let left = AnchorJoint::ALL
            .iter()
            .filter(|j| j.side() == Side::Left)
            .count();
        assert_eq!(left, 6);
    }
}
