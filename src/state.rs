//! Explicit tracker state - maxes and completed workouts
//!
//! Screens hold a snapshot of these values; every change produces a new
//! value that is then handed to the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plan::numeric::to_whole_lbs;
use crate::plan::Lift;

/// Training maxes per lift plus the weighted pull-up added weight (lbs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maxes {
    pub squat: u32,
    pub bench: u32,
    pub deadlift: u32,
    #[serde(rename = "weightedPullupWeight")]
    pub weighted_pullup_weight: u32,
}

impl Maxes {
    pub fn get(&self, lift: Lift) -> u32 {
        match lift {
            Lift::Squat => self.squat,
            Lift::Bench => self.bench,
            Lift::Deadlift => self.deadlift,
        }
    }

    pub fn with(mut self, lift: Lift, value: u32) -> Self {
        match lift {
            Lift::Squat => self.squat = value,
            Lift::Bench => self.bench = value,
            Lift::Deadlift => self.deadlift = value,
        }
        self
    }

    pub fn with_pullup_weight(mut self, value: u32) -> Self {
        self.weighted_pullup_weight = value;
        self
    }

    /// Build maxes from arbitrary stored JSON.
    ///
    /// Non-objects give the defaults. Each field accepts a number or a
    /// numeric string; anything else (missing, negative, non-finite) is 0.
    pub fn normalize(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let field = |name: &str| obj.get(name).map(coerce_weight).unwrap_or(0);

        Self {
            squat: field("squat"),
            bench: field("bench"),
            deadlift: field("deadlift"),
            weighted_pullup_weight: field("weightedPullupWeight"),
        }
    }
}

fn coerce_weight(value: &Value) -> u32 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    to_whole_lbs(number)
}

/// Ids of completed workouts, deduplicated and kept in completion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedWorkouts(Vec<String>);

impl CompletedWorkouts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|item| item == id)
    }

    pub fn with_completed(mut self, id: &str) -> Self {
        if !self.contains(id) {
            self.0.push(id.to_string());
        }
        self
    }

    pub fn without(mut self, id: &str) -> Self {
        self.0.retain(|item| item != id);
        self
    }

    pub fn toggled(self, id: &str, complete: bool) -> Self {
        if complete { self.with_completed(id) } else { self.without(id) }
    }

    pub fn cleared(self) -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keep only the string items of a stored JSON array
    pub fn normalize(value: &Value) -> Self {
        let Some(items) = value.as_array() else {
            return Self::default();
        };
        items
            .iter()
            .filter_map(Value::as_str)
            .fold(Self::default(), |acc, id| acc.with_completed(id))
    }
}

impl<S: AsRef<str>> FromIterator<S> for CompletedWorkouts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |acc, id| acc.with_completed(id.as_ref()))
    }
}
