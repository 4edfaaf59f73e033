use crate::config::{LinkSpec, NetworkConfig, NodeSpec};
use crate::net::{NetError, Network, NodeId};

fn pair() -> (Network, NodeId, NodeId) {
    let mut net = Network::default();
    let a = net.add_node("Node-A");
    let b = net.add_node("Node-B");
    (net, a, b)
}

#[test]
fn connect_is_symmetric() {
    let (mut net, a, b) = pair();
    net.connect(a, b, 25);

    assert_eq!(net.node(a).unwrap().latency_to(b), Some(25));
    assert_eq!(net.node(b).unwrap().latency_to(a), Some(25));
}

#[test]
fn connect_twice_keeps_first_latency() {
    let (mut net, a, b) = pair();
    net.connect(a, b, 10);
    net.connect(a, b, 999);
    net.connect(b, a, 999);

    assert_eq!(net.node(a).unwrap().latency_to(b), Some(10));
    assert_eq!(net.node(b).unwrap().latency_to(a), Some(10));
}

#[test]
fn connect_ignores_self_link() {
    let (mut net, a, _) = pair();
    net.connect(a, a, 5);
    assert_eq!(net.node(a).unwrap().degree(), 0);
}

#[test]
fn set_link_latency_updates_both_directions() {
    let (mut net, a, b) = pair();
    net.connect(a, b, 10);

    net.set_link_latency("Node-A", "Node-B", 70).unwrap();
    assert_eq!(net.node(a).unwrap().latency_to(b), Some(70));
    assert_eq!(net.node(b).unwrap().latency_to(a), Some(70));
}

// Scenario D: changing latency on a pair with no direct link fails and
// leaves the adjacency untouched.
#[test]
fn set_link_latency_without_link_fails() {
    let (mut net, a, b) = pair();

    let err = net.set_link_latency("Node-A", "Node-B", 999).unwrap_err();
    assert_eq!(
        err,
        NetError::LinkNotFound {
            a: "Node-A".to_string(),
            b: "Node-B".to_string(),
        }
    );
    assert_eq!(net.node(a).unwrap().degree(), 0);
    assert_eq!(net.node(b).unwrap().degree(), 0);
}

#[test]
fn set_link_latency_unknown_name_fails() {
    let (mut net, _, _) = pair();
    let err = net.set_link_latency("Node-A", "Nope", 5).unwrap_err();
    assert_eq!(err, NetError::NodeNotFound("Nope".to_string()));
}

#[test]
fn set_active_toggles_flag_and_is_idempotent() {
    let (mut net, a, _) = pair();
    assert!(net.node(a).unwrap().is_active(), "nodes start online");

    net.set_active("Node-A", false).unwrap();
    net.set_active("Node-A", false).unwrap();
    assert!(!net.node(a).unwrap().is_active());

    net.set_active("Node-A", true).unwrap();
    assert!(net.node(a).unwrap().is_active());
}

#[test]
fn set_active_unknown_name_fails() {
    let (mut net, _, _) = pair();
    assert_eq!(
        net.set_active("Ghost", false).unwrap_err(),
        NetError::NodeNotFound("Ghost".to_string())
    );
}

#[test]
fn from_config_builds_nodes_and_links() {
    let cfg = NetworkConfig {
        nodes: vec![
            NodeSpec { name: "A".into() },
            NodeSpec { name: "B".into() },
            NodeSpec { name: "C".into() },
        ],
        links: vec![
            LinkSpec("A".into(), "B".into(), 10),
            LinkSpec("B".into(), "C".into(), 20),
        ],
    };
    let net = Network::from_config(&cfg);

    assert_eq!(net.len(), 3);
    let a = net.find_by_name("A").unwrap();
    let b = net.find_by_name("B").unwrap();
    let c = net.find_by_name("C").unwrap();
    assert_eq!(net.node(a).unwrap().latency_to(b), Some(10));
    assert_eq!(net.node(c).unwrap().latency_to(b), Some(20));
    assert_eq!(net.node(a).unwrap().latency_to(c), None);
}

#[test]
fn from_config_skips_duplicate_node_names() {
    let cfg = NetworkConfig {
        nodes: vec![
            NodeSpec { name: "A".into() },
            NodeSpec { name: "A".into() },
            NodeSpec { name: "B".into() },
        ],
        links: vec![],
    };
    let net = Network::from_config(&cfg);
    assert_eq!(net.len(), 2);
}

// Partial construction: a link with an unresolved endpoint is skipped, the
// remaining links still get built.
#[test]
fn from_config_tolerates_unresolved_link_endpoints() {
    let cfg = NetworkConfig {
        nodes: vec![NodeSpec { name: "A".into() }, NodeSpec { name: "B".into() }],
        links: vec![
            LinkSpec("A".into(), "Missing".into(), 10),
            LinkSpec("A".into(), "B".into(), 30),
        ],
    };
    let net = Network::from_config(&cfg);

    assert_eq!(net.len(), 2);
    let a = net.find_by_name("A").unwrap();
    let b = net.find_by_name("B").unwrap();
    assert_eq!(net.node(a).unwrap().latency_to(b), Some(30));
    assert_eq!(net.node(a).unwrap().degree(), 1);
}

#[test]
fn find_by_name_returns_first_match_in_creation_order() {
    let mut net = Network::default();
    let first = net.add_node("Twin");
    let _second = net.add_node("Twin");
    assert_eq!(net.find_by_name("Twin"), Some(first));
}

#[test]
fn node_ids_are_stable_and_unique() {
    let mut net = Network::default();
    let a = net.add_node("A");
    let b = net.add_node("B");
    assert_ne!(a, b);
    assert_eq!(net.node(a).unwrap().name(), "A");
    assert_eq!(net.node(b).unwrap().name(), "B");
}
