use hsd_survey::Endpoint;
use std::fmt;

/// The five charts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChartView {
    AgeDistribution,
    ExerciseVsHealth,
    SleepVsStress,
    DoctorVisits,
    SeasonalVisits,
}

impl ChartView {
    /// All views, in the order the dashboard starts them.
    pub const ALL: [ChartView; 5] = [
        ChartView::AgeDistribution,
        ChartView::ExerciseVsHealth,
        ChartView::SleepVsStress,
        ChartView::DoctorVisits,
        ChartView::SeasonalVisits,
    ];

    pub fn endpoint(&self) -> Endpoint {
        match self {
            ChartView::AgeDistribution => Endpoint::AgeDistributionByGender,
            ChartView::ExerciseVsHealth => Endpoint::ExerciseVsHealthByAge,
            ChartView::SleepVsStress => Endpoint::SleepVsStress,
            ChartView::DoctorVisits => Endpoint::DoctorVisitsByCondition,
            ChartView::SeasonalVisits => Endpoint::SeasonalDoctorVisits,
        }
    }

    /// DOM id of the element the chart is drawn into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartView::AgeDistribution => "age-distribution-chart",
            ChartView::ExerciseVsHealth => "exercise-health-chart",
            ChartView::SleepVsStress => "sleep-stress-chart",
            ChartView::DoctorVisits => "doctor-visits-chart",
            ChartView::SeasonalVisits => "seasonal-visits-chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartView::AgeDistribution => "Age Distribution by Gender",
            ChartView::ExerciseVsHealth => "Exercise vs Health Score by Age Group",
            ChartView::SleepVsStress => "Sleep Duration vs Stress Level",
            ChartView::DoctorVisits => "Doctor Visits by Chronic Condition",
            ChartView::SeasonalVisits => "Seasonal Patterns in Doctor Visits",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChartView::AgeDistribution => "How ages are spread across genders in the survey.",
            ChartView::ExerciseVsHealth => "Weekly exercise hours against health score, per age group.",
            ChartView::SleepVsStress => "Nightly sleep against self-reported stress (1-10).",
            ChartView::DoctorVisits => "Average yearly doctor visits, labelled with patient counts.",
            ChartView::SeasonalVisits => "Average yearly doctor visits by season of the survey.",
        }
    }

    /// Fixed prefix of the diagnostic logged when the chart fails to load.
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            ChartView::AgeDistribution => "Error loading age distribution:",
            ChartView::ExerciseVsHealth => "Error loading exercise vs health:",
            ChartView::SleepVsStress => "Error loading sleep vs stress:",
            ChartView::DoctorVisits => "Error loading doctor visits:",
            ChartView::SeasonalVisits => "Error loading seasonal patterns:",
        }
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

#[cfg(test)]
mod tests {
    use super::ChartView;
    use std::collections::HashSet;

    #[test]
    fn every_view_has_its_own_container_and_endpoint() {
        let containers: HashSet<&str> = ChartView::ALL.iter().map(|v| v.container_id()).collect();
        let endpoints: HashSet<_> = ChartView::ALL.iter().map(|v| v.endpoint()).collect();
        assert_eq!(containers.len(), ChartView::ALL.len());
        assert_eq!(endpoints.len(), ChartView::ALL.len());
    }
}
