// ABOUTME: The fixed three-step sequence of the internship form

use crate::models::FixedField;

/// Steps of the form, in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepKind {
    #[default]
    PersonalInformation,
    InternshipDetails,
    AboutYourself,
}

impl StepKind {
    /// Get all steps in order
    pub fn all() -> &'static [StepKind] {
        &[
            Self::PersonalInformation,
            Self::InternshipDetails,
            Self::AboutYourself,
        ]
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        Self::all().len()
    }

    /// Step at a zero-based position, `None` when out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Zero-based position (the value persisted under `currentStep`)
    pub fn index(&self) -> usize {
        match self {
            Self::PersonalInformation => 0,
            Self::InternshipDetails => 1,
            Self::AboutYourself => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::PersonalInformation => "Personal Information",
            Self::InternshipDetails => "Internship Details",
            Self::AboutYourself => "About Yourself",
        }
    }

    /// Built-in fields shown and validated on this step
    pub fn fields(&self) -> &'static [FixedField] {
        match self {
            Self::PersonalInformation => &[
                FixedField::FirstName,
                FixedField::LastName,
                FixedField::Email,
                FixedField::Phone,
            ],
            Self::InternshipDetails => &[
                FixedField::PrevInternExperience,
                FixedField::InternshipDuration,
            ],
            Self::AboutYourself => &[FixedField::AboutYourself],
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The last step submits instead of advancing
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}
