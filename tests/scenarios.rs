use kinship_graph::graph::{EdgeKind, MUTED_NODE_COLOR, apply_hover_focus, build_graph};
use kinship_graph::model::{Bilingual, Identity, PersonFields, PersonId, RelationshipType};
use kinship_graph::store::{Clock, Portrait};
use kinship_graph::{Error, FamilyStore, GraphSettings, Locale, Theme, resolve_display_name};

fn signed_in() -> Identity {
	Identity::new("alice")
}

fn named(nickname: &str) -> PersonFields {
	PersonFields {
		nickname: Bilingual::en(nickname),
		..PersonFields::default()
	}
}

fn family() -> (FamilyStore, PersonId, PersonId) {
	let me = signed_in();
	let who = Some(&me);
	let mut store = FamilyStore::new(5_000_000).with_clock(Clock::Fixed(10));
	let a = store.create_person(who, named("Dad")).unwrap();
	let b = store.create_person(who, named("Kid")).unwrap();
	(store, a, b)
}

fn graph_of(store: &FamilyStore, who: &Identity) -> kinship_graph::graph::Graph {
	build_graph(
		&store.list_people(Some(who)),
		&store.list_relationships(Some(who)),
		Locale::En,
		Theme::Light,
		&GraphSettings::default(),
		7,
	)
}

#[test]
fn three_relationships_between_one_pair_fan_out() {
	let me = signed_in();
	let (mut store, a, b) = family();
	let who = Some(&me);
	store.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();
	store.add_relationship(who, &b, &a, RelationshipType::OlderSibling).unwrap();
	store.add_relationship(who, &a, &b, RelationshipType::Mother).unwrap();

	let graph = graph_of(&store, &me);
	assert_eq!(graph.edges.len(), 3);
	let mut indices: Vec<_> = graph.edges.iter().map(|e| e.parallel_index).collect();
	indices.sort();
	assert_eq!(indices, vec![Some(0), Some(1), Some(2)]);
	assert!(graph.edges.iter().all(|e| e.kind == EdgeKind::Curved));
	assert!(graph.edges.iter().all(|e| e.parallel_max_index == Some(2)));

	let mut curvatures: Vec<_> = graph.edges.iter().map(|e| (e.parallel_index, e.curvature)).collect();
	curvatures.sort_by_key(|(i, _)| *i);
	assert!(curvatures.windows(2).all(|w| w[0].1 < w[1].1));
}

#[test]
fn relationship_to_self_is_rejected() {
	let me = signed_in();
	let (mut store, a, _) = family();
	let err = store
		.add_relationship(Some(&me), &a, &a, RelationshipType::Father)
		.unwrap_err();
	assert_eq!(err, Error::SelfRelationship);
	assert!(store.list_relationships(Some(&me)).is_empty());
}

#[test]
fn deleting_a_person_removes_their_edges_from_the_graph() {
	let me = signed_in();
	let (mut store, a, b) = family();
	let who = Some(&me);
	let c = store.create_person(who, named("Mum")).unwrap();
	store.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();
	store.add_relationship(who, &c, &b, RelationshipType::Mother).unwrap();

	store.delete_person(who, &a).unwrap();

	let graph = graph_of(&store, &me);
	assert_eq!(graph.nodes.len(), 2);
	assert_eq!(graph.edges.len(), 1);
	assert!(graph.edges.iter().all(|e| !e.touches(&a)));
	assert_eq!(graph.edges[0].kind, EdgeKind::Straight);
}

#[test]
fn signed_out_users_see_and_write_nothing() {
	let (mut store, a, _) = family();
	assert!(store.list_people(None).is_empty());
	assert_eq!(store.create_person(None, named("Ghost")), Err(Error::Unauthenticated));
	assert_eq!(store.delete_person(None, &a), Err(Error::Unauthenticated));
}

#[test]
fn hover_focus_settles_after_one_application() {
	let me = signed_in();
	let (mut store, a, b) = family();
	let who = Some(&me);
	let c = store.create_person(who, named("Loner")).unwrap();
	store.add_relationship(who, &a, &b, RelationshipType::Father).unwrap();

	let mut graph = graph_of(&store, &me);
	apply_hover_focus(&mut graph, Some(&a), false);
	let once = graph.clone();
	apply_hover_focus(&mut graph, Some(&a), false);
	assert_eq!(graph, once);
	assert_eq!(graph.node(&c).map(|n| n.color.as_str()), Some(MUTED_NODE_COLOR));

	apply_hover_focus(&mut graph, None, false);
	assert!(graph.nodes.iter().all(|n| n.color == n.base_color));
	assert!(graph.edges.iter().all(|e| !e.hidden));
}

#[test]
fn uploaded_portrait_reaches_the_graph_node() {
	let me = signed_in();
	let (mut store, a, _) = family();
	let portrait = Portrait {
		content_type: "image/png".into(),
		size: 1024,
		url: "blob:dad".into(),
	};
	store
		.submit_person_form(Some(&me), Some(&a), named("Dad"), Some(portrait))
		.unwrap();

	let graph = graph_of(&store, &me);
	assert_eq!(graph.node(&a).and_then(|n| n.image.as_deref()), Some("blob:dad"));
}

#[test]
fn labels_follow_the_locale() {
	let me = signed_in();
	let mut store = FamilyStore::new(5_000_000);
	let fields = PersonFields {
		nickname: Bilingual::new(Some("นก"), Some("Bird")),
		given_name: Bilingual::en("Nora"),
		..PersonFields::default()
	};
	let id = store.create_person(Some(&me), fields).unwrap();
	let person = store.get_person(Some(&me), &id).unwrap().person;

	assert_eq!(resolve_display_name(Locale::Th, &person), "นก Nora");
	assert_eq!(resolve_display_name(Locale::En, &person), "Bird Nora");
}
