//! Sector-specific analysis models (agriculture, health, sports, energy, solar)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpecializedAnalysis {
    pub agriculture: AgricultureAnalysis,
    pub health: HealthAnalysis,
    pub sports: SportsAnalysis,
    pub energy: EnergyAnalysis,
    pub solar: SolarAnalysis,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgricultureAnalysis {
    pub score: u8,
    pub status: AgricultureStatus,
    pub recommendations: Vec<&'static str>,
    pub risks: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    pub respiratory_risk: RespiratoryRisk,
    pub hydration_alert: bool,
    pub uv_protection: UvProtection,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SportsAnalysis {
    pub outdoor_score: u8,
    pub best_activities: Vec<&'static str>,
    pub avoid: Vec<&'static str>,
    pub best_time_today: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyAnalysis {
    pub ac_recommendation: AcRecommendation,
    pub solar_potential: SolarPotential,
    pub energy_saving_tips: Vec<&'static str>,
}

/// Photovoltaic production estimate for the current hour
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolarAnalysis {
    pub production_score: u8,
    pub production_level: ProductionLevel,
    pub estimated_efficiency: u8,
    pub peak_hours: String,
    pub current_status: &'static str,
    pub irradiance_level: IrradianceLevel,
    pub recommendations: Vec<&'static str>,
    pub alerts: Vec<&'static str>,
    pub daily_forecast: DailySolarForecast,
}

/// Rough production percentages for the rest of the day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySolarForecast {
    pub morning: u8,
    pub afternoon: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgricultureStatus {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
    #[serde(rename = "Desfavorável")]
    Unfavorable,
}

impl AgricultureStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => AgricultureStatus::Excellent,
            50..=69 => AgricultureStatus::Good,
            30..=49 => AgricultureStatus::Fair,
            _ => AgricultureStatus::Unfavorable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgricultureStatus::Excellent => "Excelente",
            AgricultureStatus::Good => "Bom",
            AgricultureStatus::Fair => "Regular",
            AgricultureStatus::Unfavorable => "Desfavorável",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RespiratoryRisk {
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Alto")]
    High,
}

impl RespiratoryRisk {
    pub fn label(&self) -> &'static str {
        match self {
            RespiratoryRisk::Low => "Baixo",
            RespiratoryRisk::Moderate => "Moderado",
            RespiratoryRisk::High => "Alto",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UvProtection {
    #[serde(rename = "Essencial")]
    Essential,
    #[serde(rename = "Recomendado")]
    Recommended,
}

impl UvProtection {
    pub fn label(&self) -> &'static str {
        match self {
            UvProtection::Essential => "Essencial",
            UvProtection::Recommended => "Recomendado",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AcRecommendation {
    #[serde(rename = "Recomendado")]
    Recommended,
    #[serde(rename = "Opcional")]
    Optional,
    #[serde(rename = "Desnecessário")]
    Unnecessary,
}

impl AcRecommendation {
    pub fn label(&self) -> &'static str {
        match self {
            AcRecommendation::Recommended => "Recomendado",
            AcRecommendation::Optional => "Opcional",
            AcRecommendation::Unnecessary => "Desnecessário",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SolarPotential {
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Baixo")]
    Low,
}

impl SolarPotential {
    pub fn label(&self) -> &'static str {
        match self {
            SolarPotential::High => "Alto",
            SolarPotential::Moderate => "Moderado",
            SolarPotential::Low => "Baixo",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProductionLevel {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Mínimo")]
    Minimal,
}

impl ProductionLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ProductionLevel::Excellent,
            60..=79 => ProductionLevel::Good,
            40..=59 => ProductionLevel::Moderate,
            20..=39 => ProductionLevel::Low,
            _ => ProductionLevel::Minimal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductionLevel::Excellent => "Excelente",
            ProductionLevel::Good => "Bom",
            ProductionLevel::Moderate => "Moderado",
            ProductionLevel::Low => "Baixo",
            ProductionLevel::Minimal => "Mínimo",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IrradianceLevel {
    #[serde(rename = "Nulo")]
    None,
    #[serde(rename = "Muito Baixo")]
    VeryLow,
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Alto")]
    High,
    #[serde(rename = "Máximo")]
    Peak,
}

impl IrradianceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            IrradianceLevel::None => "Nulo",
            IrradianceLevel::VeryLow => "Muito Baixo",
            IrradianceLevel::Low => "Baixo",
            IrradianceLevel::Moderate => "Moderado",
            IrradianceLevel::High => "Alto",
            IrradianceLevel::Peak => "Máximo",
        }
    }
}

impl std::fmt::Display for AgricultureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for RespiratoryRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for UvProtection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for AcRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for SolarPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for ProductionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for IrradianceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
