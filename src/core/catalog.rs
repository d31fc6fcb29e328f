use crate::core::taxonomy::Taxonomy;
use crate::domain::model::{dedup_tags, Program};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{first_duplicate, validate_registry_text};

/// Immutable registry of programs in declaration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Vec<Program>,
}

impl Catalog {
    /// Validates every program against the taxonomy it will be ranked with.
    pub fn new(programs: Vec<Program>, taxonomy: &Taxonomy) -> Result<Self> {
        let programs: Vec<Program> = programs
            .into_iter()
            .map(|mut program| {
                program.area_tags = dedup_tags(std::mem::take(&mut program.area_tags));
                program
            })
            .collect();

        for program in &programs {
            validate_registry_text("catalog", &program.id, "id", &program.id)?;
            validate_registry_text("catalog", &program.id, "name", &program.name)?;
            validate_registry_text(
                "catalog",
                &program.id,
                "institution",
                &program.institution_name,
            )?;

            if program.area_tags.is_empty() {
                return Err(EngineError::InvalidRegistryEntryError {
                    registry: "catalog".to_string(),
                    id: program.id.clone(),
                    reason: "a program needs at least one area tag".to_string(),
                });
            }

            if let Some(area) = program
                .area_tags
                .iter()
                .find(|area| !taxonomy.contains(area))
            {
                return Err(EngineError::UnknownAreaError {
                    program: program.id.clone(),
                    area: area.clone(),
                });
            }
        }

        if let Some(id) = first_duplicate(programs.iter().map(|program| program.id.as_str())) {
            return Err(EngineError::DuplicateProgramError { id: id.to_string() });
        }

        Ok(Self { programs })
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn get(&self, program_id: &str) -> Option<&Program> {
        self.programs.iter().find(|program| program.id == program_id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn institution_count(&self) -> usize {
        let mut institutions: Vec<&str> = self
            .programs
            .iter()
            .map(|program| program.institution_name.as_str())
            .collect();
        institutions.sort_unstable();
        institutions.dedup();
        institutions.len()
    }
}
