//! Typed response bodies, one per endpoint.
//!
//! Each record is deserialized with serde and then checked by
//! [`Payload::validate`], so a body that parses but does not line up (for
//! instance three sleep readings against two stress readings) is rejected
//! before it reaches a chart.

use crate::endpoint::Endpoint;
use crate::error::{expect_len, LoadResult};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A response body bound to the endpoint that produces it.
pub trait Payload: DeserializeOwned {
    const ENDPOINT: Endpoint;

    /// Reject bodies whose parallel sequences disagree in length.
    fn validate(&self) -> LoadResult<()> {
        Ok(())
    }
}

/// Parse and validate a response body.
pub fn parse_payload<P: Payload>(body: &str) -> LoadResult<P> {
    let payload: P = serde_json::from_str(body)?;
    payload.validate()?;
    Ok(payload)
}

/// Ages grouped by gender label, in the order the backend sent them.
///
/// Serialized as a JSON object; a `Vec` of pairs keeps key order without
/// needing an order-preserving map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenderAges(pub Vec<(String, Vec<f64>)>);

impl GenderAges {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.0.iter().map(|(gender, ages)| (gender.as_str(), ages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for GenderAges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GenderAgesVisitor;

        impl<'de> Visitor<'de> for GenderAgesVisitor {
            type Value = GenderAges;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of gender label to a list of ages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut groups = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((gender, ages)) = map.next_entry::<String, Vec<f64>>()? {
                    groups.push((gender, ages));
                }
                Ok(GenderAges(groups))
            }
        }

        deserializer.deserialize_map(GenderAgesVisitor)
    }
}

impl Serialize for GenderAges {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(gender, ages)| (gender, ages)))
    }
}

/// `GET /api/age-distribution-by-gender`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDistribution {
    pub data: GenderAges,
}

impl Payload for AgeDistribution {
    const ENDPOINT: Endpoint = Endpoint::AgeDistributionByGender;
}

/// One age bucket of exercise hours paired with health scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeGroupSample {
    /// Bucket label such as "<30" or "45-60"
    pub age_group: String,
    pub exercise_hours: Vec<f64>,
    pub health_scores: Vec<f64>,
}

/// `GET /api/exercise-vs-health-by-age`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseVsHealth {
    pub data: Vec<AgeGroupSample>,
}

impl Payload for ExerciseVsHealth {
    const ENDPOINT: Endpoint = Endpoint::ExerciseVsHealthByAge;

    fn validate(&self) -> LoadResult<()> {
        self.data.iter().try_for_each(|group| {
            expect_len(
                "health_scores",
                group.exercise_hours.len(),
                group.health_scores.len(),
            )
        })
    }
}

/// `GET /api/sleep-vs-stress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepVsStress {
    pub sleep_hours: Vec<f64>,
    pub stress_levels: Vec<f64>,
}

impl Payload for SleepVsStress {
    const ENDPOINT: Endpoint = Endpoint::SleepVsStress;

    fn validate(&self) -> LoadResult<()> {
        expect_len(
            "stress_levels",
            self.sleep_hours.len(),
            self.stress_levels.len(),
        )
    }
}

/// `GET /api/doctor-visits-by-condition`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorVisitsByCondition {
    pub conditions: Vec<String>,
    pub avg_visits: Vec<f64>,
    pub patient_count: Vec<f64>,
}

impl Payload for DoctorVisitsByCondition {
    const ENDPOINT: Endpoint = Endpoint::DoctorVisitsByCondition;

    fn validate(&self) -> LoadResult<()> {
        let expected = self.conditions.len();
        expect_len("avg_visits", expected, self.avg_visits.len())?;
        expect_len("patient_count", expected, self.patient_count.len())
    }
}

/// `GET /api/seasonal-doctor-visits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDoctorVisits {
    pub seasons: Vec<String>,
    pub avg_visits: Vec<f64>,
}

impl Payload for SeasonalDoctorVisits {
    const ENDPOINT: Endpoint = Endpoint::SeasonalDoctorVisits;

    fn validate(&self) -> LoadResult<()> {
        expect_len("avg_visits", self.seasons.len(), self.avg_visits.len())
    }
}
