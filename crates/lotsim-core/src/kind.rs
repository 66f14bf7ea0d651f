//! Car and spot categories.
//!
//! Both are closed enums. The single-character labels (`E`, `S`, `R`,
//! `L`, `N`) exist only for the text boundary; every allocation decision
//! matches on the variant itself.

use std::fmt;

use crate::error::LabelError;

/// The category of a car.
///
/// Variants are declared in ascending rank, so the derived `Ord` gives
/// `Economy < Small < Regular < Large`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CarType {
    /// Fits in any parkable spot.
    Economy,
    /// Needs a Small, Regular or Large spot.
    Small,
    /// Needs a Regular or Large spot.
    Regular,
    /// Needs a Large spot.
    Large,
}

impl CarType {
    /// All car categories in ascending rank.
    pub const ALL: [CarType; 4] = [
        CarType::Economy,
        CarType::Small,
        CarType::Regular,
        CarType::Large,
    ];

    /// Numeric rank: 0 for Economy up to 3 for Large.
    pub fn rank(self) -> u8 {
        match self {
            Self::Economy => 0,
            Self::Small => 1,
            Self::Regular => 2,
            Self::Large => 3,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::Small => "SMALL",
            Self::Regular => "REGULAR",
            Self::Large => "LARGE",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category of a grid cell in the lot design.
///
/// The four parkable categories mirror [`CarType`]; [`NotParkable`]
/// marks cells that can never hold a car (aisles, pillars, ramps).
///
/// [`NotParkable`]: SpotType::NotParkable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpotType {
    /// Economy-only spot.
    Economy,
    /// Small spot.
    Small,
    /// Regular spot.
    Regular,
    /// Large spot.
    Large,
    /// Non-parkable marker.
    NotParkable,
}

impl SpotType {
    /// All spot categories, parkable ones first.
    pub const ALL: [SpotType; 5] = [
        SpotType::Economy,
        SpotType::Small,
        SpotType::Regular,
        SpotType::Large,
        SpotType::NotParkable,
    ];

    /// Whether a car of any type may ever occupy this cell.
    pub fn is_parkable(self) -> bool {
        !matches!(self, Self::NotParkable)
    }

    /// Compatibility table.
    ///
    /// | car \ spot | E | S | R | L | N |
    /// |------------|---|---|---|---|---|
    /// | Economy    | y | y | y | y | - |
    /// | Small      | - | y | y | y | - |
    /// | Regular    | - | - | y | y | - |
    /// | Large      | - | - | - | y | - |
    ///
    /// Each row is spelled out rather than derived from [`CarType::rank`].
    pub fn accepts(self, car: CarType) -> bool {
        match car {
            CarType::Economy => self.is_parkable(),
            CarType::Small => matches!(self, Self::Small | Self::Regular | Self::Large),
            CarType::Regular => matches!(self, Self::Regular | Self::Large),
            CarType::Large => matches!(self, Self::Large),
        }
    }

    /// Text label used in lot-design files.
    pub fn label(self) -> char {
        match self {
            Self::Economy => 'E',
            Self::Small => 'S',
            Self::Regular => 'R',
            Self::Large => 'L',
            Self::NotParkable => 'N',
        }
    }

    /// Parse a spot label from a lot-design file.
    pub fn from_label(label: char) -> Result<Self, LabelError> {
        match label {
            'E' => Ok(Self::Economy),
            'S' => Ok(Self::Small),
            'R' => Ok(Self::Regular),
            'L' => Ok(Self::Large),
            'N' => Ok(Self::NotParkable),
            _ => Err(LabelError { label }),
        }
    }
}

impl From<CarType> for SpotType {
    fn from(car: CarType) -> Self {
        match car {
            CarType::Economy => Self::Economy,
            CarType::Small => Self::Small,
            CarType::Regular => Self::Regular,
            CarType::Large => Self::Large,
        }
    }
}

impl fmt::Display for SpotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expected(car: CarType, spot: SpotType) -> bool {
        use CarType as C;
        use SpotType as S;
        matches!(
            (car, spot),
            (C::Economy, S::Economy | S::Small | S::Regular | S::Large)
                | (C::Small, S::Small | S::Regular | S::Large)
                | (C::Regular, S::Regular | S::Large)
                | (C::Large, S::Large)
        )
    }

    #[test]
    fn compatibility_table_exhaustive() {
        for car in CarType::ALL {
            for spot in SpotType::ALL {
                assert_eq!(
                    spot.accepts(car),
                    expected(car, spot),
                    "{car:?} in {spot:?}"
                );
            }
        }
    }

    #[test]
    fn economy_car_fits_every_parkable_spot() {
        for spot in SpotType::ALL {
            assert_eq!(spot.accepts(CarType::Economy), spot.is_parkable());
        }
    }

    #[test]
    fn large_car_only_fits_large() {
        assert!(!SpotType::Economy.accepts(CarType::Large));
        assert!(!SpotType::Small.accepts(CarType::Large));
        assert!(!SpotType::Regular.accepts(CarType::Large));
        assert!(SpotType::Large.accepts(CarType::Large));
    }

    #[test]
    fn economy_spot_takes_only_economy_cars() {
        assert!(SpotType::Economy.accepts(CarType::Economy));
        assert!(!SpotType::Economy.accepts(CarType::Small));
        assert!(!SpotType::Economy.accepts(CarType::Regular));
        assert!(!SpotType::Economy.accepts(CarType::Large));
    }

    #[test]
    fn marker_accepts_nothing() {
        for car in CarType::ALL {
            assert!(!SpotType::NotParkable.accepts(car));
        }
    }

    #[test]
    fn labels_round_trip() {
        for spot in SpotType::ALL {
            assert_eq!(SpotType::from_label(spot.label()), Ok(spot));
        }
        for car in CarType::ALL {
            assert_eq!(SpotType::from(car).label(), car.name().chars().next().unwrap());
        }
        assert_eq!(SpotType::from_label('x'), Err(LabelError { label: 'x' }));
    }

    #[test]
    fn rank_follows_declaration_order() {
        for pair in CarType::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
    }

    fn arb_car() -> impl Strategy<Value = CarType> {
        prop_oneof![
            Just(CarType::Economy),
            Just(CarType::Small),
            Just(CarType::Regular),
            Just(CarType::Large),
        ]
    }

    proptest! {
        #[test]
        fn matching_spot_always_accepts(car in arb_car()) {
            prop_assert!(SpotType::from(car).accepts(car));
        }

        #[test]
        fn acceptance_shrinks_with_rank(a in arb_car(), b in arb_car()) {
            // A higher-ranked car is accepted by a subset of the spots
            // that accept a lower-ranked one.
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for spot in SpotType::ALL {
                if spot.accepts(hi) {
                    prop_assert!(spot.accepts(lo), "{spot:?} takes {hi:?} but not {lo:?}");
                }
            }
        }
    }
}
