//! Given steps for query discovery BDD scenarios.

use super::world::{DiscoveryWorld, SessionCount};
use rstest_bdd_macros::given;
use sqlmon::query::domain::{QueryRegistration, QueryType};

#[given(r#"a resource "{name}" containing "{text}""#)]
fn a_resource(world: &mut DiscoveryWorld, name: String, text: String) {
    world.catalog.insert(name, text);
}

#[given("the database returns a session count of {count:f64}")]
fn database_returns_session_count(world: &mut DiscoveryWorld, count: f64) {
    let row = [("session_count".to_owned(), serde_json::json!(count))]
        .into_iter()
        .collect();
    world.rows.push(row);
}

#[given(r#"a session count query registering "{resource}""#)]
fn session_count_query(world: &mut DiscoveryWorld, resource: String) {
    world.query_types.push(QueryType::of::<SessionCount>([
        QueryRegistration::from_owned(resource),
    ]));
}

#[given(r#"a session count query with a disabled registration "{resource}""#)]
fn disabled_session_count_query(world: &mut DiscoveryWorld, resource: String) {
    world.query_types.push(QueryType::of::<SessionCount>([
        QueryRegistration::from_owned(resource).disabled(),
    ]));
}

#[given(r#"an untyped query type "{name}" registering "{resource}""#)]
fn untyped_query_type(world: &mut DiscoveryWorld, name: String, resource: String) {
    world.query_types.push(QueryType::untyped(name, [
        QueryRegistration::from_owned(resource),
    ]));
}
