//! Axum route handlers for the Taxonomy API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::taxonomy::{BroaderSkill, TaxonomyStats};

#[derive(Debug, Serialize)]
pub struct RequirementSkill {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct OccupationDetail {
    pub id: String,
    pub name: String,
    pub requirements: Vec<RequirementSkill>,
}

/// GET /api/v1/taxonomy
pub async fn handle_taxonomy_stats(State(state): State<AppState>) -> Json<TaxonomyStats> {
    Json(state.taxonomy.stats())
}

/// GET /api/v1/skills/:id/broader
///
/// Immediate broader concepts of a skill. Unknown skills and skills without a
/// recorded edge both return an empty list.
pub async fn handle_broader(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<BroaderSkill>> {
    Json(state.taxonomy.broader_of(&id))
}

/// GET /api/v1/occupations/:id
pub async fn handle_get_occupation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OccupationDetail>, AppError> {
    let taxonomy = &state.taxonomy;
    let name = taxonomy
        .occupations()
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Occupation {id} not found")))?;

    let requirements = taxonomy
        .relation_for(&id)
        .map(|relation| {
            relation
                .requirement_skill_ids
                .iter()
                .map(|skill_id| RequirementSkill {
                    id: skill_id.clone(),
                    name: taxonomy.skill_label(skill_id).to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(Json(OccupationDetail {
        id,
        name,
        requirements,
    }))
}
