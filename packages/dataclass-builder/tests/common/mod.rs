//! Shared record fixtures for integration tests

#![allow(dead_code)]

use dataclass_builder::dataclass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct PixelCoord + PixelCoordBuilder {
        pub x: i64,
        pub y: i64,
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Point + PointBuilder {
        pub x: f64,
        pub y: f64,
        pub w: f64 = 1.0,
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Types + TypesBuilder {
        pub int_: i64,
        pub float_: f64,
        pub str_: String = "hello".to_string(),
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Collections + CollectionsBuilder {
        pub sequence: Vec<i64>,
        pub mapping: BTreeMap<String, f64>,
        pub tags: Vec<String> = Vec::new(),
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Circle + CircleBuilder {
        pub radius: f64,
        pub _area: f64 = 0.0,
    }
}

impl Circle {
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Job + JobBuilder {
        pub name: String,
        pub build: bool,
        pub fields: Vec<String> = Vec::new(),
    }
}

dataclass! {
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct NoFields + NoFieldsBuilder {}
}

dataclass! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct Wide + WideBuilder {
        pub big: i128,
        pub small: u8 = 0,
    }
}

/// Value whose equality is never true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unequal(pub i64);

impl PartialEq for Unequal {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

dataclass! {
    #[derive(Debug, Clone)]
    pub struct Odd + OddBuilder {
        pub value: Unequal,
        pub fallback: Unequal = Unequal(0),
    }
}
