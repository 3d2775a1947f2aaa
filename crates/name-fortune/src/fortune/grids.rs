use super::domain::{Element, Grid, GridKind, NameStructure, StrokeCounts};
use serde::{Deserialize, Serialize};

/// The five grids derived from one name. Every value is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiveGrids {
    pub heaven: Grid,
    pub person: Grid,
    pub earth: Grid,
    pub outer: Grid,
    pub total: Grid,
}

impl FiveGrids {
    /// Grids from raw values given in heaven, person, earth, outer, total order.
    pub fn from_values(values: [u32; 5]) -> Self {
        let [heaven, person, earth, outer, total] = values;
        Self {
            heaven: Grid::new(GridKind::Heaven, heaven),
            person: Grid::new(GridKind::Person, person),
            earth: Grid::new(GridKind::Earth, earth),
            outer: Grid::new(GridKind::Outer, outer),
            total: Grid::new(GridKind::Total, total),
        }
    }

    pub fn get(&self, kind: GridKind) -> Grid {
        match kind {
            GridKind::Heaven => self.heaven,
            GridKind::Person => self.person,
            GridKind::Earth => self.earth,
            GridKind::Outer => self.outer,
            GridKind::Total => self.total,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Grid> {
        [self.heaven, self.person, self.earth, self.outer, self.total].into_iter()
    }

    /// Elements of the heaven, person and earth grids, in that order.
    pub fn talent_elements(&self) -> [Element; 3] {
        [self.heaven.element, self.person.element, self.earth.element]
    }
}

impl Grid {
    /// Builds a grid, lifting zero to 1 so every grid keeps a numerology entry.
    pub fn new(kind: GridKind, value: u32) -> Self {
        let value = value.max(1);
        Self {
            kind,
            value,
            element: Element::of(i64::from(value)),
        }
    }
}

pub fn compute_grids(structure: &NameStructure, counts: &StrokeCounts) -> FiveGrids {
    let surname_sum: u32 = counts.surname_strokes().sum();
    let given_sum: u32 = counts.given_name_strokes().sum();
    let surname_last = counts.surname_strokes().last().unwrap_or(0);
    let given_first = counts.given_name_strokes().next().unwrap_or(0);

    // single surnames borrow the imaginary stroke above them
    let heaven = if structure.is_compound_surname() {
        surname_sum
    } else {
        surname_sum + 1
    };
    let person = surname_last + given_first;
    let single_given = structure.given_name_len() == 1;
    let earth = if single_given {
        given_first + 1
    } else {
        given_sum
    };
    let total = surname_sum + given_sum;
    let outer = if single_given {
        2
    } else {
        total.saturating_sub(person) + 1
    };

    FiveGrids::from_values([heaven, person, earth, outer, total])
}
