//! Then steps for query discovery BDD scenarios.

use super::world::DiscoveryWorld;
use rstest_bdd_macros::then;
use sqlmon::query::services::QueryLocatorError;

#[then("{count:usize} query is prepared")]
fn prepared_count(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    let queries = world.prepared_queries()?;
    if queries.len() != count {
        return Err(eyre::eyre!(
            "expected {count} prepared queries, found {}",
            queries.len()
        ));
    }
    Ok(())
}

#[then(r#"the query "{name}" reads resource "{resource}""#)]
fn query_reads_resource(
    world: &DiscoveryWorld,
    name: String,
    resource: String,
) -> Result<(), eyre::Report> {
    let query = world
        .prepared_queries()?
        .iter()
        .find(|query| query.query_name() == name)
        .ok_or_else(|| eyre::eyre!("no prepared query named '{name}'"))?;
    let actual = query.query().qualified_resource_name();
    if actual != resource {
        return Err(eyre::eyre!("expected '{resource}', query reads '{actual}'"));
    }
    Ok(())
}

#[then("discovery fails with an ambiguous resource error listing {count:usize} candidates")]
fn fails_with_ambiguous_resource(world: &DiscoveryWorld, count: usize) -> Result<(), eyre::Report> {
    match world.prepared.as_ref() {
        Some(Err(QueryLocatorError::AmbiguousResource { candidates, .. }))
            if candidates.len() == count =>
        {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected ambiguous resource with {count} candidates, got {other:?}"
        )),
    }
}

#[then(r#"discovery fails with an invalid query type error for "{name}""#)]
fn fails_with_invalid_query_type(world: &DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    match world.prepared.as_ref() {
        Some(Err(QueryLocatorError::InvalidQueryType { query_type })) if *query_type == name => {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected invalid query type '{name}', got {other:?}"
        )),
    }
}

#[then(r#"component "{name}" reports metric "{metric}" as {value:f64}"#)]
fn component_reports_metric(
    world: &DiscoveryWorld,
    name: String,
    metric: String,
    value: f64,
) -> Result<(), eyre::Report> {
    let component = world
        .components
        .iter()
        .find(|component| component.name() == name)
        .ok_or_else(|| eyre::eyre!("no component named '{name}'"))?;
    let actual = component.metric(&metric);
    if actual != Some(value) {
        return Err(eyre::eyre!("expected {metric} = {value}, got {actual:?}"));
    }
    Ok(())
}
