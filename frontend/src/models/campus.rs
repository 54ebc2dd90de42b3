#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub name: &'static str,
    pub icon: &'static str,
    /// Load in percent, 0-100.
    pub load: u8,
    pub x: u8,
    pub y: u8,
}

pub const BUILDINGS: [Building; 6] = [
    Building { name: "Science Block", icon: "🔬", load: 75, x: 15, y: 20 },
    Building { name: "Library", icon: "📚", load: 45, x: 65, y: 30 },
    Building { name: "Admin", icon: "🏛️", load: 60, x: 25, y: 50 },
    Building { name: "Dorm A", icon: "🏠", load: 85, x: 75, y: 15 },
    Building { name: "Lecture Hall", icon: "🎓", load: 55, x: 50, y: 65 },
    Building { name: "Gymnasium", icon: "🏀", load: 90, x: 10, y: 70 },
];

/// Width the hover handler restores when the fill has no `data-original`.
pub const FALLBACK_FILL_WIDTH: &str = "70%";
pub const HOVER_FILL_WIDTH: &str = "100%";
pub const HOVER_FILL_COLOR: &str = "#ff4757";

impl Building {
    pub fn position_style(&self) -> String {
        format!("left: {}%; top: {}%;", self.x, self.y)
    }

    pub fn load_width(&self) -> String {
        format!("{}%", self.load)
    }

    pub fn load_label(&self) -> String {
        format!("{}% load", self.load)
    }
}

pub fn reveal_delay_ms(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    base_ms + step_ms * index as u32
}

pub fn restored_fill_width(data_original: Option<String>) -> String {
    data_original.unwrap_or_else(|| FALLBACK_FILL_WIDTH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_buildings_in_fixed_order() {
        let names: Vec<_> = BUILDINGS.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            ["Science Block", "Library", "Admin", "Dorm A", "Lecture Hall", "Gymnasium"]
        );
        let loads: Vec<_> = BUILDINGS.iter().map(|b| b.load).collect();
        assert_eq!(loads, [75, 45, 60, 85, 55, 90]);
    }

    #[test]
    fn staggered_reveal() {
        let delays: Vec<_> = (0..BUILDINGS.len()).map(|i| reveal_delay_ms(i, 300, 200)).collect();
        assert_eq!(delays, [300, 500, 700, 900, 1100, 1300]);
    }

    #[test]
    fn marker_text() {
        let dorm = BUILDINGS[3];
        assert_eq!(dorm.position_style(), "left: 75%; top: 15%;");
        assert_eq!(dorm.load_width(), "85%");
        assert_eq!(dorm.load_label(), "85% load");
    }

    #[test]
    fn hover_restore_falls_back_to_seventy() {
        assert_eq!(restored_fill_width(None), "70%");
        assert_eq!(restored_fill_width(Some("45%".to_string())), "45%");
    }
}
