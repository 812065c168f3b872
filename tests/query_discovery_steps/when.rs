//! When steps for query discovery BDD scenarios.

use super::world::{DiscoveryWorld, run_async};
use rstest_bdd_macros::when;
use sqlmon::query::domain::ComponentData;

#[when("the queries are prepared")]
fn prepare_queries(world: &mut DiscoveryWorld) {
    world.prepared = Some(world.locator().prepare_queries());
}

#[when(r#"every prepared query is invoked for component "{name}""#)]
fn invoke_prepared_queries(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let mut component = ComponentData::new(name);
    for query in world.prepared_queries()? {
        let results = run_async(query.invoke(&()))
            .map_err(|err| eyre::eyre!("invocation of '{}' failed: {err}", query.query_name()))?;
        component.absorb(&results);
    }
    world.components.push(component);
    Ok(())
}
