use crate::config::PageConfig;
use serde::Serialize;

pub const HOUR_LABELS: [&str; 8] = ["6AM", "8AM", "10AM", "12PM", "2PM", "4PM", "6PM", "8PM"];
pub const WITH_PRODUCT: [u32; 8] = [120, 180, 220, 240, 210, 190, 150, 100];
pub const WITHOUT_PRODUCT: [u32; 8] = [120, 250, 320, 380, 350, 300, 280, 250];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Legend {
    pub position: &'static str,
}

/// Daily load with and without the product, as a Chart.js line chart.
pub fn energy_chart(config: &PageConfig) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: HOUR_LABELS.to_vec(),
            datasets: vec![
                Dataset {
                    label: config.with_product("With"),
                    data: WITH_PRODUCT.to_vec(),
                    border_color: "#2A5CAA",
                    background_color: "rgba(42, 92, 170, 0.1)",
                    fill: true,
                    tension: 0.4,
                },
                Dataset {
                    label: config.with_product("Without"),
                    data: WITHOUT_PRODUCT.to_vec(),
                    border_color: "#FF6B35",
                    background_color: "rgba(255, 107, 53, 0.1)",
                    fill: true,
                    tension: 0.4,
                },
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins { legend: Legend { position: "top" } },
        },
    }
}
