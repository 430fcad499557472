use std::fmt;

use uuid::Uuid;

use crate::domain::classroom::errors::ClassroomIdError;
use crate::domain::classroom::errors::GradeError;
use crate::domain::classroom::errors::SectionError;

/// Classroom entity: one section of one grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    pub id: ClassroomId,
    pub grade: Grade,
    pub section: Section,
}

/// Classroom unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassroomId(pub Uuid);

impl ClassroomId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a classroom ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ClassroomIdError> {
        Uuid::parse_str(s.trim())
            .map(ClassroomId)
            .map_err(|e| ClassroomIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ClassroomId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClassroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// School grade, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Grade(u32);

impl Grade {
    const MIN: i64 = 1;

    /// # Errors
    /// * `TooLow` - Grade below 1
    pub fn new(grade: i64) -> Result<Self, GradeError> {
        u32::try_from(grade)
            .ok()
            .filter(|g| i64::from(*g) >= Self::MIN)
            .map(Self)
            .ok_or(GradeError::TooLow {
                min: Self::MIN,
                actual: grade,
            })
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Section label within a grade (e.g. "A"). Trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section(String);

impl Section {
    /// # Errors
    /// * `Empty` - Blank section
    pub fn new(section: String) -> Result<Self, SectionError> {
        let section = section.trim();
        if section.is_empty() {
            return Err(SectionError::Empty);
        }
        Ok(Self(section.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a classroom with validated fields
#[derive(Debug)]
pub struct CreateClassroomCommand {
    pub grade: Grade,
    pub section: Section,
}

impl CreateClassroomCommand {
    pub fn new(grade: Grade, section: Section) -> Self {
        Self { grade, section }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bounds() {
        assert_eq!(Grade::new(1).unwrap().value(), 1);
        assert_eq!(Grade::new(12).unwrap().value(), 12);
        assert_eq!(
            Grade::new(0),
            Err(GradeError::TooLow { min: 1, actual: 0 })
        );
        assert!(Grade::new(-3).is_err());
        assert!(Grade::new(i64::MAX).is_err());
    }

    #[test]
    fn test_section_is_trimmed() {
        assert_eq!(Section::new("  B ".to_string()).unwrap().as_str(), "B");
        assert_eq!(Section::new("   ".to_string()), Err(SectionError::Empty));
    }
}
