use std::fmt;

/// The five aggregate endpoints exposed by the survey backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    AgeDistributionByGender,
    ExerciseVsHealthByAge,
    SleepVsStress,
    DoctorVisitsByCondition,
    SeasonalDoctorVisits,
}

impl Endpoint {
    /// All endpoints, in dashboard order.
    pub const ALL: [Endpoint; 5] = [
        Endpoint::AgeDistributionByGender,
        Endpoint::ExerciseVsHealthByAge,
        Endpoint::SleepVsStress,
        Endpoint::DoctorVisitsByCondition,
        Endpoint::SeasonalDoctorVisits,
    ];

    /// Path relative to the API base address.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AgeDistributionByGender => "/api/age-distribution-by-gender",
            Endpoint::ExerciseVsHealthByAge => "/api/exercise-vs-health-by-age",
            Endpoint::SleepVsStress => "/api/sleep-vs-stress",
            Endpoint::DoctorVisitsByCondition => "/api/doctor-visits-by-condition",
            Endpoint::SeasonalDoctorVisits => "/api/seasonal-doctor-visits",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
