use chrono::NaiveDate;
use lifeline_core::dataset::builtin;
use lifeline_core::{DatasetError, Link, Node, TimelineDataset};
use std::collections::HashSet;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date should parse")
}

fn plain_node(id: &str) -> Node {
    Node::new(id, id.to_uppercase(), date("2020-01-01"), "", "life")
}

#[test]
fn builtin_has_expected_cardinality() {
    let data = builtin();
    assert_eq!(data.node_count(), 15);
    assert_eq!(data.link_count(), 14);
    assert_eq!(data.nodes().len(), 15);
    assert_eq!(data.links().len(), 14);
}

#[test]
fn builtin_node_ids_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for node in builtin().nodes() {
        assert!(seen.insert(node.id.as_str()), "duplicate id: {}", node.id);
    }
}

#[test]
fn builtin_links_are_referentially_intact() {
    let data = builtin();
    for link in data.links() {
        assert!(
            data.node(&link.source).is_some(),
            "dangling source: {}",
            link.source
        );
        assert!(
            data.node(&link.target).is_some(),
            "dangling target: {}",
            link.target
        );
    }
}

#[test]
fn retrieval_is_idempotent_and_order_preserving() {
    let data = builtin();
    let first: Vec<&str> = data.nodes().iter().map(|node| node.id.as_str()).collect();
    let second: Vec<&str> = data.nodes().iter().map(|node| node.id.as_str()).collect();
    assert_eq!(first, second);

    let first_links: Vec<(&str, &str)> = data
        .links()
        .iter()
        .map(|link| (link.source.as_str(), link.target.as_str()))
        .collect();
    let second_links: Vec<(&str, &str)> = data
        .links()
        .iter()
        .map(|link| (link.source.as_str(), link.target.as_str()))
        .collect();
    assert_eq!(first_links, second_links);
}

#[test]
fn today_node_has_expected_fields() {
    let node = builtin().node("today").expect("today should exist");
    assert_eq!(node.name, "Today");
    assert_eq!(node.date, date("2023-06-05"));
    assert_eq!(node.kind, "present");
}

#[test]
fn unknown_id_returns_none() {
    assert!(builtin().node("nonexistent").is_none());
}

#[test]
fn today_has_exactly_two_outgoing_links() {
    let targets: Vec<&str> = builtin()
        .links_from("today")
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(targets, ["travel", "house"]);
}

#[test]
fn house_diamond_converges_on_retirement() {
    let data = builtin();

    let from_house: Vec<&str> = data
        .links_from("house")
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(from_house, ["business", "family"]);

    let from_business: Vec<&str> = data
        .links_from("business")
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(from_business, ["retirement"]);

    let from_family: Vec<&str> = data
        .links_from("family")
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(from_family, ["retirement"]);

    let into_retirement: Vec<&str> = data
        .links_into("retirement")
        .map(|link| link.source.as_str())
        .collect();
    assert_eq!(into_retirement, ["business", "family"]);
}

#[test]
fn builtin_dates_serialize_as_iso_calendar_dates() {
    let json = serde_json::to_value(builtin()).expect("builtin should serialize");
    let nodes = json["nodes"].as_array().expect("nodes should be an array");
    assert_eq!(nodes.len(), 15);

    for node in nodes {
        let raw = node["date"].as_str().expect("date should be a string");
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .unwrap_or_else(|_| panic!("date `{raw}` is not a valid YYYY-MM-DD date"));
    }
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(builtin()).expect("builtin should serialize");

    let object = json.as_object().expect("dataset should be an object");
    assert!(object.contains_key("nodes"));
    assert!(object.contains_key("links"));
    assert!(!object.contains_key("index"));

    let today = json["nodes"]
        .as_array()
        .expect("nodes should be an array")
        .iter()
        .find(|node| node["id"] == "today")
        .expect("today should be present");
    assert_eq!(today["name"], "Today");
    assert_eq!(today["date"], "2023-06-05");
    assert_eq!(today["type"], "present");
    assert_eq!(today["description"], "Your current position in the timeline.");

    let link = &json["links"][0];
    assert_eq!(link["source"], "birth");
    assert_eq!(link["target"], "school");
}

#[test]
fn ad_hoc_category_is_preserved_verbatim() {
    let node = builtin().node("coolthings").expect("coolthings should exist");
    assert_eq!(node.kind, "cool thing");
}

#[test]
fn construction_rejects_duplicate_ids() {
    let nodes = vec![plain_node("dup"), plain_node("other"), plain_node("dup")];
    let err = TimelineDataset::new(nodes, Vec::new()).unwrap_err();
    assert_eq!(err, DatasetError::DuplicateNodeId("dup".to_string()));
}

#[test]
fn construction_rejects_dangling_links() {
    let nodes = vec![plain_node("a")];
    let links = vec![Link::new("a", "ghost")];
    let err = TimelineDataset::new(nodes, links).unwrap_err();
    assert_eq!(
        err,
        DatasetError::DanglingLink {
            source: "a".to_string(),
            target: "ghost".to_string(),
            missing: "ghost".to_string(),
        }
    );
}

#[test]
fn deserialization_runs_the_same_validation() {
    let value = serde_json::json!({
        "nodes": [
            { "id": "a", "name": "A", "date": "2020-01-01", "description": "", "type": "life" }
        ],
        "links": [
            { "source": "a", "target": "ghost" }
        ]
    });

    let err = serde_json::from_value::<TimelineDataset>(value).unwrap_err();
    assert!(
        err.to_string().contains("missing node id: ghost"),
        "unexpected error: {err}"
    );
}

#[test]
fn dataset_roundtrips_through_json() {
    let json = serde_json::to_value(builtin()).expect("builtin should serialize");
    let decoded: TimelineDataset =
        serde_json::from_value(json).expect("serialized builtin should deserialize");

    assert_eq!(decoded.node_count(), builtin().node_count());
    assert_eq!(decoded.link_count(), builtin().link_count());
    assert_eq!(decoded.node("today"), builtin().node("today"));
}
