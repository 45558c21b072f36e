use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Page orientation, measured clockwise from upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// Upright (0°).
    #[default]
    North,
    /// Quarter turn clockwise (90°).
    East,
    /// Upside down (180°).
    South,
    /// Quarter turn counter-clockwise (270°).
    West,
}

/// Direction of a single quarter-turn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    /// Advance North → East → South → West.
    Clockwise,
    /// Advance North → West → South → East.
    CounterClockwise,
}

impl Rotation {
    /// All orientations in clockwise order starting from North.
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Angle in degrees: 0, 90, 180 or 270.
    pub fn angle(self) -> u16 {
        match self {
            Rotation::North => 0,
            Rotation::East => 90,
            Rotation::South => 180,
            Rotation::West => 270,
        }
    }

    /// Build a rotation from any multiple of 90 degrees (negative angles allowed).
    pub fn from_angle(angle: i32) -> CoreResult<Self> {
        if angle % 90 != 0 {
            return Err(CoreError::InvalidAngle { angle });
        }
        Ok(match angle.rem_euclid(360) {
            0 => Rotation::North,
            90 => Rotation::East,
            180 => Rotation::South,
            _ => Rotation::West,
        })
    }

    pub fn clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::East => Rotation::North,
            Rotation::South => Rotation::East,
            Rotation::West => Rotation::South,
        }
    }

    /// Advance one step in `direction`.
    pub fn step(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.clockwise(),
            RotationDirection::CounterClockwise => self.counter_clockwise(),
        }
    }

    /// Lower-case direction name, as understood by pdftk page ranges.
    pub fn name(self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }

    pub fn is_upright(self) -> bool {
        self == Rotation::North
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl RotationDirection {
    pub fn inverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Rotation::North.clockwise(), Rotation::East);
        assert_eq!(Rotation::East.clockwise(), Rotation::South);
        assert_eq!(Rotation::South.clockwise(), Rotation::West);
        assert_eq!(Rotation::West.clockwise(), Rotation::North);
    }

    #[test]
    fn test_counter_clockwise_is_inverse() {
        for rotation in Rotation::ALL {
            assert_eq!(rotation.clockwise().counter_clockwise(), rotation);
            assert_eq!(rotation.counter_clockwise().clockwise(), rotation);
        }
    }

    #[test]
    fn test_angles() {
        let angles: Vec<u16> = Rotation::ALL.iter().map(|r| r.angle()).collect();
        assert_eq!(angles, vec![0, 90, 180, 270]);
    }

    #[test]
    fn test_from_angle_normalises() {
        assert_eq!(Rotation::from_angle(0), Ok(Rotation::North));
        assert_eq!(Rotation::from_angle(450), Ok(Rotation::East));
        assert_eq!(Rotation::from_angle(-90), Ok(Rotation::West));
        assert_eq!(Rotation::from_angle(-540), Ok(Rotation::South));
        assert_eq!(
            Rotation::from_angle(45),
            Err(CoreError::InvalidAngle { angle: 45 })
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Rotation::East.to_string(), "east");
        assert_eq!(Rotation::West.name(), "west");
        assert!(Rotation::North.is_upright());
        assert!(!Rotation::South.is_upright());
    }

    fn any_rotation() -> impl Strategy<Value = Rotation> {
        prop::sample::select(Rotation::ALL.to_vec())
    }

    fn any_direction() -> impl Strategy<Value = RotationDirection> {
        prop_oneof![
            Just(RotationDirection::Clockwise),
            Just(RotationDirection::CounterClockwise)
        ]
    }

    proptest! {
        #[test]
        fn prop_four_steps_return_to_start(start in any_rotation(), direction in any_direction()) {
            let end = (0..4).fold(start, |r, _| r.step(direction));
            prop_assert_eq!(end, start);
        }

        #[test]
        fn prop_angle_round_trips(rotation in any_rotation()) {
            prop_assert_eq!(Rotation::from_angle(rotation.angle() as i32), Ok(rotation));
        }

        #[test]
        fn prop_inverse_direction_undoes_step(start in any_rotation(), direction in any_direction()) {
            prop_assert_eq!(start.step(direction).step(direction.inverse()), start);
        }
    }
}
