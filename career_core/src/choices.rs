//! Closed choice sets offered by the wizard.
//!
//! Every field the user fills in is picked from one of these fixed catalogs.
//! Each choice has a stable slug (used on the command line and in catalog
//! files) and the human-readable label shown to the user.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A value drawn from a fixed, ordered catalog
pub trait Choice: Copy + Eq + 'static {
    /// Name of the catalog, used in error messages
    const KIND: &'static str;
    /// Every value, in presentation order
    const ALL: &'static [Self];

    fn slug(&self) -> &'static str;
    fn label(&self) -> &'static str;

    /// Position in `ALL` (0-based)
    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
}

/// Parse a choice from its slug or label (case-insensitive)
pub fn parse_choice<T: Choice>(value: &str) -> Result<T, ParseChoiceError> {
    let needle = value.trim();
    T::ALL
        .iter()
        .copied()
        .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
        .ok_or_else(|| ParseChoiceError {
            kind: T::KIND,
            value: value.to_string(),
        })
}

// ============================================================
// EDUCATION
// ============================================================

/// Highest educational qualification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th Pass", alias = "10th")]
    TenthPass,
    #[serde(rename = "12th Pass", alias = "12th")]
    TwelfthPass,
    #[serde(rename = "Diploma/ITI", alias = "diploma")]
    Diploma,
    #[serde(rename = "Bachelor's Degree", alias = "bachelors")]
    Bachelors,
    #[serde(rename = "Master's Degree", alias = "masters")]
    Masters,
    #[serde(rename = "Professional Degree (CA/CS/Engineering)", alias = "professional")]
    Professional,
    #[serde(rename = "PhD/Research", alias = "phd")]
    PhdResearch,
    #[serde(rename = "Other", alias = "other")]
    Other,
}

impl Choice for EducationLevel {
    const KIND: &'static str = "education level";
    const ALL: &'static [Self] = &[
        EducationLevel::TenthPass,
        EducationLevel::TwelfthPass,
        EducationLevel::Diploma,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Professional,
        EducationLevel::PhdResearch,
        EducationLevel::Other,
    ];

    fn slug(&self) -> &'static str {
        match self {
            EducationLevel::TenthPass => "10th",
            EducationLevel::TwelfthPass => "12th",
            EducationLevel::Diploma => "diploma",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::Masters => "masters",
            EducationLevel::Professional => "professional",
            EducationLevel::PhdResearch => "phd",
            EducationLevel::Other => "other",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            EducationLevel::TenthPass => "10th Pass",
            EducationLevel::TwelfthPass => "12th Pass",
            EducationLevel::Diploma => "Diploma/ITI",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Professional => "Professional Degree (CA/CS/Engineering)",
            EducationLevel::PhdResearch => "PhD/Research",
            EducationLevel::Other => "Other",
        }
    }
}

// ============================================================
// SKILLS
// ============================================================

/// A skill the user can tick on the skills stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Communication Skills", alias = "communication")]
    Communication,
    #[serde(rename = "Computer/IT Skills", alias = "computer_it")]
    ComputerIt,
    #[serde(rename = "Sales & Marketing", alias = "sales_marketing")]
    SalesMarketing,
    #[serde(rename = "Teaching & Training", alias = "teaching_training")]
    TeachingTraining,
    #[serde(rename = "Customer Service", alias = "customer_service")]
    CustomerService,
    #[serde(rename = "Data Analysis", alias = "data_analysis")]
    DataAnalysis,
    #[serde(rename = "Project Management", alias = "project_management")]
    ProjectManagement,
    #[serde(rename = "Technical/Engineering", alias = "technical_engineering")]
    TechnicalEngineering,
    #[serde(rename = "Creative/Design", alias = "creative_design")]
    CreativeDesign,
    #[serde(rename = "Financial Planning", alias = "financial_planning")]
    FinancialPlanning,
    #[serde(rename = "Healthcare/Medical", alias = "healthcare_medical")]
    HealthcareMedical,
    #[serde(rename = "Language Skills", alias = "language")]
    Language,
    #[serde(rename = "Digital Marketing", alias = "digital_marketing")]
    DigitalMarketing,
    #[serde(rename = "Content Writing", alias = "content_writing")]
    ContentWriting,
}

impl Choice for Skill {
    const KIND: &'static str = "skill";
    const ALL: &'static [Self] = &[
        Skill::Communication,
        Skill::ComputerIt,
        Skill::SalesMarketing,
        Skill::TeachingTraining,
        Skill::CustomerService,
        Skill::DataAnalysis,
        Skill::ProjectManagement,
        Skill::TechnicalEngineering,
        Skill::CreativeDesign,
        Skill::FinancialPlanning,
        Skill::HealthcareMedical,
        Skill::Language,
        Skill::DigitalMarketing,
        Skill::ContentWriting,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Skill::Communication => "communication",
            Skill::ComputerIt => "computer_it",
            Skill::SalesMarketing => "sales_marketing",
            Skill::TeachingTraining => "teaching_training",
            Skill::CustomerService => "customer_service",
            Skill::DataAnalysis => "data_analysis",
            Skill::ProjectManagement => "project_management",
            Skill::TechnicalEngineering => "technical_engineering",
            Skill::CreativeDesign => "creative_design",
            Skill::FinancialPlanning => "financial_planning",
            Skill::HealthcareMedical => "healthcare_medical",
            Skill::Language => "language",
            Skill::DigitalMarketing => "digital_marketing",
            Skill::ContentWriting => "content_writing",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Skill::Communication => "Communication Skills",
            Skill::ComputerIt => "Computer/IT Skills",
            Skill::SalesMarketing => "Sales & Marketing",
            Skill::TeachingTraining => "Teaching & Training",
            Skill::CustomerService => "Customer Service",
            Skill::DataAnalysis => "Data Analysis",
            Skill::ProjectManagement => "Project Management",
            Skill::TechnicalEngineering => "Technical/Engineering",
            Skill::CreativeDesign => "Creative/Design",
            Skill::FinancialPlanning => "Financial Planning",
            Skill::HealthcareMedical => "Healthcare/Medical",
            Skill::Language => "Language Skills",
            Skill::DigitalMarketing => "Digital Marketing",
            Skill::ContentWriting => "Content Writing",
        }
    }
}

// ============================================================
// INTEREST AREA
// ============================================================

/// Career interest area (single select)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InterestArea {
    #[serde(rename = "Information Technology", alias = "it")]
    InformationTechnology,
    #[serde(rename = "Healthcare & Medicine", alias = "healthcare")]
    Healthcare,
    #[serde(rename = "Education & Training", alias = "education")]
    Education,
    #[serde(rename = "Business & Entrepreneurship", alias = "business")]
    Business,
    #[serde(rename = "Government & Public Service", alias = "government")]
    Government,
    #[serde(rename = "Banking & Finance", alias = "banking")]
    Banking,
    #[serde(rename = "Media & Entertainment", alias = "media")]
    Media,
    #[serde(rename = "Agriculture & Food", alias = "agriculture")]
    Agriculture,
    #[serde(rename = "Manufacturing & Engineering", alias = "manufacturing")]
    Manufacturing,
    #[serde(rename = "Social Work & NGO", alias = "social_work")]
    SocialWork,
    #[serde(rename = "Tourism & Hospitality", alias = "tourism")]
    Tourism,
    #[serde(rename = "Retail & E-commerce", alias = "retail")]
    Retail,
}

impl Choice for InterestArea {
    const KIND: &'static str = "interest area";
    const ALL: &'static [Self] = &[
        InterestArea::InformationTechnology,
        InterestArea::Healthcare,
        InterestArea::Education,
        InterestArea::Business,
        InterestArea::Government,
        InterestArea::Banking,
        InterestArea::Media,
        InterestArea::Agriculture,
        InterestArea::Manufacturing,
        InterestArea::SocialWork,
        InterestArea::Tourism,
        InterestArea::Retail,
    ];

    fn slug(&self) -> &'static str {
        match self {
            InterestArea::InformationTechnology => "it",
            InterestArea::Healthcare => "healthcare",
            InterestArea::Education => "education",
            InterestArea::Business => "business",
            InterestArea::Government => "government",
            InterestArea::Banking => "banking",
            InterestArea::Media => "media",
            InterestArea::Agriculture => "agriculture",
            InterestArea::Manufacturing => "manufacturing",
            InterestArea::SocialWork => "social_work",
            InterestArea::Tourism => "tourism",
            InterestArea::Retail => "retail",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InterestArea::InformationTechnology => "Information Technology",
            InterestArea::Healthcare => "Healthcare & Medicine",
            InterestArea::Education => "Education & Training",
            InterestArea::Business => "Business & Entrepreneurship",
            InterestArea::Government => "Government & Public Service",
            InterestArea::Banking => "Banking & Finance",
            InterestArea::Media => "Media & Entertainment",
            InterestArea::Agriculture => "Agriculture & Food",
            InterestArea::Manufacturing => "Manufacturing & Engineering",
            InterestArea::SocialWork => "Social Work & NGO",
            InterestArea::Tourism => "Tourism & Hospitality",
            InterestArea::Retail => "Retail & E-commerce",
        }
    }
}

// ============================================================
// TIMELINE / LOCATION
// ============================================================

/// When the user plans to start working
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Immediate,
    Short,
    Medium,
    Long,
}

impl Choice for Timeline {
    const KIND: &'static str = "timeline";
    const ALL: &'static [Self] = &[
        Timeline::Immediate,
        Timeline::Short,
        Timeline::Medium,
        Timeline::Long,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::Short => "short",
            Timeline::Medium => "medium",
            Timeline::Long => "long",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Timeline::Immediate => "Immediate (0-2 months)",
            Timeline::Short => "Short term (2-6 months)",
            Timeline::Medium => "Medium term (6-12 months)",
            Timeline::Long => "Long term (1+ years)",
        }
    }
}

/// Preferred work location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Bangalore,
    Mumbai,
    Delhi,
    Hyderabad,
    Pune,
    Chennai,
    Kolkata,
    Ahmedabad,
    Remote,
    Anywhere,
}

impl Choice for Location {
    const KIND: &'static str = "location";
    const ALL: &'static [Self] = &[
        Location::Bangalore,
        Location::Mumbai,
        Location::Delhi,
        Location::Hyderabad,
        Location::Pune,
        Location::Chennai,
        Location::Kolkata,
        Location::Ahmedabad,
        Location::Remote,
        Location::Anywhere,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Location::Bangalore => "bangalore",
            Location::Mumbai => "mumbai",
            Location::Delhi => "delhi",
            Location::Hyderabad => "hyderabad",
            Location::Pune => "pune",
            Location::Chennai => "chennai",
            Location::Kolkata => "kolkata",
            Location::Ahmedabad => "ahmedabad",
            Location::Remote => "remote",
            Location::Anywhere => "anywhere",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Location::Bangalore => "Bangalore",
            Location::Mumbai => "Mumbai",
            Location::Delhi => "Delhi NCR",
            Location::Hyderabad => "Hyderabad",
            Location::Pune => "Pune",
            Location::Chennai => "Chennai",
            Location::Kolkata => "Kolkata",
            Location::Ahmedabad => "Ahmedabad",
            Location::Remote => "Remote/Work from Home",
            Location::Anywhere => "Open to relocate",
        }
    }
}

// Display and FromStr are identical for every catalog.
macro_rules! impl_text_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = ParseChoiceError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_choice(s)
                }
            }
        )+
    };
}

impl_text_conversions!(EducationLevel, Skill, InterestArea, Timeline, Location);
