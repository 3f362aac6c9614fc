//! # Laptops: Verbosity Tiers
//!
//! Each tier is a struct that flattens the tier below it, so the field set
//! of [`LaptopRegular`] contains [`LaptopMinimum`]'s and
//! [`LaptopExtended`] contains both. Projection clones the requested prefix
//! of that nesting and nothing else.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::verbosity::{Project, Verbosity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaptopMinimum {
    /// Unique identifier for the laptop.
    pub id: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaptopRegular {
    #[serde(flatten)]
    pub minimum: LaptopMinimum,
    pub processor: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub screen_size: f64,
    pub operating_system: String,
    pub in_stock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LaptopExtended {
    #[serde(flatten)]
    pub regular: LaptopRegular,
    pub graphics_card: String,
    pub battery_whr: u32,
    pub weight_kg: f64,
    /// Length, width, height.
    #[schema(value_type = Vec<f64>, min_items = 3, max_items = 3)]
    pub dimensions_cm: [f64; 3],
    pub ports: Vec<String>,
    pub warranty_months: u32,
    pub release_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    pub description: String,
    pub features: Vec<String>,
    pub reviews_count: u32,
    pub average_rating: f64,
}

impl LaptopExtended {
    pub fn id(&self) -> &str {
        &self.regular.minimum.id
    }
}

/// A laptop cut down to one tier.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum LaptopView {
    Minimum(LaptopMinimum),
    Regular(LaptopRegular),
    Extended(LaptopExtended),
}

impl LaptopView {
    pub fn verbosity(&self) -> Verbosity {
        match self {
            Self::Minimum(_) => Verbosity::Minimum,
            Self::Regular(_) => Verbosity::Regular,
            Self::Extended(_) => Verbosity::Extended,
        }
    }
}

impl Project for LaptopExtended {
    type View = LaptopView;

    fn project(&self, verbosity: Verbosity) -> LaptopView {
        match verbosity {
            Verbosity::Minimum => LaptopView::Minimum(self.regular.minimum.clone()),
            Verbosity::Regular => LaptopView::Regular(self.regular.clone()),
            Verbosity::Extended => LaptopView::Extended(self.clone()),
        }
    }
}

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Sample {
    id: &'static str,
    brand: &'static str,
    model: &'static str,
    price: f64,
    processor: &'static str,
    ram_gb: u32,
    storage_gb: u32,
    screen_size: f64,
    operating_system: &'static str,
    in_stock: bool,
    graphics_card: &'static str,
    battery_whr: u32,
    weight_kg: f64,
    dimensions_cm: [f64; 3],
    ports: &'static [&'static str],
    warranty_months: u32,
    release_date: (i32, u32, u32),
    last_updated: (i32, u32, u32),
    description: &'static str,
    features: &'static [&'static str],
    reviews_count: u32,
    average_rating: f64,
}

impl From<&Sample> for LaptopExtended {
    fn from(s: &Sample) -> Self {
        let (ry, rm, rd) = s.release_date;
        let (uy, um, ud) = s.last_updated;
        Self {
            regular: LaptopRegular {
                minimum: LaptopMinimum {
                    id: s.id.to_string(),
                    brand: s.brand.to_string(),
                    model: s.model.to_string(),
                    price: s.price,
                },
                processor: s.processor.to_string(),
                ram_gb: s.ram_gb,
                storage_gb: s.storage_gb,
                screen_size: s.screen_size,
                operating_system: s.operating_system.to_string(),
                in_stock: s.in_stock,
            },
            graphics_card: s.graphics_card.to_string(),
            battery_whr: s.battery_whr,
            weight_kg: s.weight_kg,
            dimensions_cm: s.dimensions_cm,
            ports: strings(s.ports),
            warranty_months: s.warranty_months,
            release_date: midnight(ry, rm, rd),
            last_updated: midnight(uy, um, ud),
            description: s.description.to_string(),
            features: strings(s.features),
            reviews_count: s.reviews_count,
            average_rating: s.average_rating,
        }
    }
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "LP123456",
        brand: "TechBook",
        model: "Pro X15",
        price: 1299.99,
        processor: "Intel Core i7 12700H",
        ram_gb: 16,
        storage_gb: 512,
        screen_size: 15.6,
        operating_system: "Windows 11 Pro",
        in_stock: true,
        graphics_card: "NVIDIA RTX 3060 6GB",
        battery_whr: 80,
        weight_kg: 2.1,
        dimensions_cm: [35.8, 24.2, 1.9],
        ports: &["USB-C", "USB-A", "HDMI", "Audio Jack"],
        warranty_months: 24,
        release_date: (2023, 6, 15),
        last_updated: (2024, 1, 15),
        description: "Professional grade laptop for demanding users",
        features: &["Backlit Keyboard", "Fingerprint Reader", "Thunderbolt 4"],
        reviews_count: 128,
        average_rating: 4.5,
    },
    Sample {
        id: "LP789101",
        brand: "FutureComp",
        model: "Vision Z14",
        price: 1599.99,
        processor: "AMD Ryzen 9 6900HX",
        ram_gb: 32,
        storage_gb: 1024,
        screen_size: 14.0,
        operating_system: "Windows 11 Home",
        in_stock: true,
        graphics_card: "AMD Radeon 680M",
        battery_whr: 76,
        weight_kg: 1.8,
        dimensions_cm: [32.1, 22.0, 1.7],
        ports: &["USB-C", "HDMI", "Audio Jack"],
        warranty_months: 36,
        release_date: (2023, 9, 10),
        last_updated: (2024, 1, 12),
        description: "Ultra-lightweight laptop with powerful performance",
        features: &["Face Recognition", "Wi-Fi 6E", "OLED Display"],
        reviews_count: 89,
        average_rating: 4.7,
    },
    Sample {
        id: "LP567812",
        brand: "ProCompute",
        model: "Elite G17",
        price: 1899.99,
        processor: "Intel Core i9 12900H",
        ram_gb: 64,
        storage_gb: 2048,
        screen_size: 17.3,
        operating_system: "Windows 11 Pro",
        in_stock: false,
        graphics_card: "NVIDIA RTX 4080 12GB",
        battery_whr: 99,
        weight_kg: 3.2,
        dimensions_cm: [39.6, 26.5, 2.1],
        ports: &["USB-C", "USB-A", "HDMI", "Ethernet"],
        warranty_months: 12,
        release_date: (2022, 11, 20),
        last_updated: (2024, 1, 10),
        description: "High-performance gaming and workstation laptop",
        features: &["4K Display", "RGB Keyboard", "Thunderbolt 4"],
        reviews_count: 345,
        average_rating: 4.6,
    },
    Sample {
        id: "LP345678",
        brand: "MegaWorks",
        model: "SwiftEdge S13",
        price: 899.99,
        processor: "Intel Core i5 12450H",
        ram_gb: 8,
        storage_gb: 256,
        screen_size: 13.3,
        operating_system: "Windows 11 Home",
        in_stock: true,
        graphics_card: "Intel Iris Xe",
        battery_whr: 58,
        weight_kg: 1.2,
        dimensions_cm: [30.5, 21.2, 1.5],
        ports: &["USB-C", "HDMI", "MicroSD"],
        warranty_months: 12,
        release_date: (2023, 3, 25),
        last_updated: (2024, 1, 5),
        description: "Compact laptop ideal for students and professionals",
        features: &["Touchscreen", "Lightweight Design", "Fast Charging"],
        reviews_count: 256,
        average_rating: 4.3,
    },
];

/// The bundled laptop catalogue, in listing order.
pub fn sample_catalogue() -> Vec<LaptopExtended> {
    SAMPLES.iter().map(LaptopExtended::from).collect()
}
