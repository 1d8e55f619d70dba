use pretty_assertions::assert_eq;
use relgraph_core::schema::app::*;
use relgraph_core::schema::relation::{Descriptor, ManyToManySpec, Resolver, VisitSet};
use relgraph_core::schema::Name;

const AUTHOR: ModelId = ModelId(0);
const BOOK: ModelId = ModelId(1);
const TAG: ModelId = ModelId(2);
const CHAPTER: ModelId = ModelId(3);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn make_model(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
    let mut model = Model::new(id, name);
    model.fields = fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| Field {
            id: id.field(index),
            ..field
        })
        .collect();
    model
}

fn field(name: &str, ty: impl Into<Type>) -> Field {
    Field::new(ModelId(0).field(0), name, ty)
}

fn many_to_many(name: &str, target: ModelId) -> Field {
    field(name, Type::list(target)).with_relation(Relation::ManyToMany)
}

fn leaf(model: ModelId, name: &str) -> Descriptor {
    Descriptor {
        model,
        name: Name::new(name),
        has_many: vec![],
        many_to_many: vec![],
    }
}

fn resolve(models: &[Model], model: ModelId) -> relgraph_core::Result<Descriptor> {
    init_logging();
    Resolver::new(models).resolve(model)
}

fn author_book() -> Vec<Model> {
    vec![
        make_model(
            AUTHOR,
            "Author",
            vec![field("name", Type::String), many_to_many("books", BOOK)],
        ),
        make_model(
            BOOK,
            "Book",
            vec![field("title", Type::String), many_to_many("authors", AUTHOR)],
        ),
    ]
}

#[test]
fn author_books_emits_one_spec() {
    let models = author_book();

    let descriptor = resolve(&models, AUTHOR).unwrap();

    assert_eq!(
        descriptor,
        Descriptor {
            model: AUTHOR,
            name: Name::new("Author"),
            has_many: vec![],
            many_to_many: vec![ManyToManySpec {
                left: AUTHOR,
                field: "books".to_string(),
                // Book's reciprocal relation points back at Author, which is
                // already being expanded
                right: leaf(BOOK, "Book"),
            }],
        }
    );
}

#[test]
fn visit_set_records_entered_models() {
    init_logging();
    let models = author_book();
    let resolver = Resolver::new(&models);

    let mut visited = VisitSet::new();
    let specs = resolver
        .many_to_many(AUTHOR, &mut visited, &models[0].fields)
        .unwrap();

    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].right_model(), BOOK);
    assert_eq!(visited.iter().collect::<Vec<_>>(), [AUTHOR, BOOK]);
}

#[test]
fn reused_visit_set_suppresses_entered_targets() {
    init_logging();
    let models = author_book();
    let resolver = Resolver::new(&models);
    let mut visited = VisitSet::new();

    let books = resolver
        .many_to_many(BOOK, &mut visited, &models[1].fields)
        .unwrap();
    assert_eq!(books.len(), 1);

    // Both models were entered by the first call
    let authors = resolver
        .many_to_many(AUTHOR, &mut visited, &models[0].fields)
        .unwrap();
    assert_eq!(authors, vec![]);
}

#[test]
fn resolution_is_idempotent() {
    let models = author_book();

    let first = resolve(&models, AUTHOR).unwrap();
    let second = resolve(&models, AUTHOR).unwrap();
    assert_eq!(first, second);

    // Resolving another model in between does not leak state
    let book = resolve(&models, BOOK).unwrap();
    assert_eq!(book.many_to_many[0].right, leaf(AUTHOR, "Author"));
    assert_eq!(resolve(&models, AUTHOR).unwrap(), first);
}

#[test]
fn missing_reciprocal_field_is_asymmetric() {
    let models = vec![
        make_model(AUTHOR, "Author", vec![many_to_many("books", BOOK)]),
        make_model(BOOK, "Book", vec![field("title", Type::String)]),
    ];

    let err = resolve(&models, AUTHOR).unwrap_err();
    let asymmetric = err.as_asymmetric_many_to_many().unwrap();

    assert_eq!(asymmetric.model(), "Author");
    assert_eq!(asymmetric.field(), "books");
    assert_eq!(asymmetric.target(), "Book");
}

#[test]
fn reciprocal_field_must_be_an_annotated_list_of_the_owner() {
    let reciprocals = [
        // Not annotated
        field("authors", Type::list(AUTHOR)),
        // Annotated, but holds a different model
        many_to_many("tags", TAG),
        // Annotated, but not a list
        field("author", AUTHOR).with_relation(Relation::ManyToMany),
    ];

    for reciprocal in reciprocals {
        let models = vec![
            make_model(AUTHOR, "Author", vec![many_to_many("books", BOOK)]),
            make_model(BOOK, "Book", vec![reciprocal]),
            make_model(TAG, "Tag", vec![many_to_many("books", BOOK)]),
        ];

        let err = resolve(&models, AUTHOR).unwrap_err();
        assert!(err.is_asymmetric_many_to_many(), "{err}");
    }
}

#[test]
fn non_list_many_to_many_field_is_skipped() {
    let models = vec![
        make_model(
            AUTHOR,
            "Author",
            vec![field("favorite", BOOK).with_relation(Relation::ManyToMany)],
        ),
        make_model(BOOK, "Book", vec![]),
    ];

    assert_eq!(resolve(&models, AUTHOR).unwrap(), leaf(AUTHOR, "Author"));
}

#[test]
fn every_many_to_many_field_is_emitted() {
    let models = vec![
        make_model(
            AUTHOR,
            "Author",
            vec![many_to_many("books", BOOK), many_to_many("tags", TAG)],
        ),
        make_model(BOOK, "Book", vec![many_to_many("authors", AUTHOR)]),
        make_model(TAG, "Tag", vec![many_to_many("authors", AUTHOR)]),
    ];

    let descriptor = resolve(&models, AUTHOR).unwrap();

    assert_eq!(
        descriptor.many_to_many,
        vec![
            ManyToManySpec {
                left: AUTHOR,
                field: "books".to_string(),
                right: leaf(BOOK, "Book"),
            },
            ManyToManySpec {
                left: AUTHOR,
                field: "tags".to_string(),
                right: leaf(TAG, "Tag"),
            },
        ]
    );
}

#[test]
fn chain_is_expanded_transitively() {
    // Author <-> Book <-> Tag
    let models = vec![
        make_model(AUTHOR, "Author", vec![many_to_many("books", BOOK)]),
        make_model(
            BOOK,
            "Book",
            vec![many_to_many("authors", AUTHOR), many_to_many("tags", TAG)],
        ),
        make_model(TAG, "Tag", vec![many_to_many("books", BOOK)]),
    ];

    let descriptor = resolve(&models, AUTHOR).unwrap();

    let walked: Vec<_> = descriptor
        .walk_many_to_many()
        .map(|spec| (spec.left, spec.field.as_str(), spec.right_model()))
        .collect();
    assert_eq!(walked, [(AUTHOR, "books", BOOK), (BOOK, "tags", TAG)]);

    let book = &descriptor.many_to_many_field("books").unwrap().right;
    assert!(book.many_to_many_field("authors").is_none());
}

#[test]
fn fully_connected_cycle_terminates_and_expands_each_model_once() {
    // Every model relates to every other model
    let models = vec![
        make_model(
            AUTHOR,
            "Author",
            vec![many_to_many("books", BOOK), many_to_many("tags", TAG)],
        ),
        make_model(
            BOOK,
            "Book",
            vec![many_to_many("authors", AUTHOR), many_to_many("tags", TAG)],
        ),
        make_model(
            TAG,
            "Tag",
            vec![many_to_many("authors", AUTHOR), many_to_many("books", BOOK)],
        ),
    ];

    for root in [AUTHOR, BOOK, TAG] {
        let descriptor = resolve(&models, root).unwrap();

        // The root's direct relations are all present
        assert_eq!(descriptor.many_to_many.len(), 2);

        let mut seen: Vec<_> = descriptor.models().collect();
        assert_eq!(seen.len(), 3, "root={root:?}; {descriptor:#?}");
        seen.sort();
        assert_eq!(seen, [AUTHOR, BOOK, TAG]);
    }
}

#[test]
fn asymmetry_deep_in_the_graph_aborts_resolution() {
    let models = vec![
        make_model(AUTHOR, "Author", vec![many_to_many("books", BOOK)]),
        make_model(
            BOOK,
            "Book",
            vec![many_to_many("authors", AUTHOR), many_to_many("tags", TAG)],
        ),
        make_model(TAG, "Tag", vec![field("label", Type::String)]),
    ];

    let err = resolve(&models, AUTHOR).unwrap_err();
    let asymmetric = err.as_asymmetric_many_to_many().unwrap();
    assert_eq!(asymmetric.model(), "Book");
    assert_eq!(asymmetric.field(), "tags");
}

#[test]
fn asymmetry_is_reported_even_for_visited_targets() {
    // Author claims both Book and Tag. Book's `tags` then points at an
    // already entered model that does not relate back to Book.
    let models = vec![
        make_model(
            AUTHOR,
            "Author",
            vec![many_to_many("books", BOOK), many_to_many("tags", TAG)],
        ),
        make_model(
            BOOK,
            "Book",
            vec![many_to_many("authors", AUTHOR), many_to_many("tags", TAG)],
        ),
        make_model(TAG, "Tag", vec![many_to_many("authors", AUTHOR)]),
    ];

    let err = resolve(&models, AUTHOR).unwrap_err();
    let asymmetric = err.as_asymmetric_many_to_many().unwrap();
    assert_eq!(asymmetric.model(), "Book");
    assert_eq!(asymmetric.field(), "tags");
    assert_eq!(asymmetric.target(), "Tag");
}

#[test]
fn target_has_many_relations_are_resolved() {
    let mut chapter = make_model(CHAPTER, "Chapter", vec![field("title", Type::String)]);
    chapter.belongs_to = Some(BelongsTo { target: BOOK });

    let mut models = author_book();
    models.push(make_model(TAG, "Tag", vec![]));
    models[1].fields.push(Field {
        id: BOOK.field(2),
        ..field("chapters", Type::list(CHAPTER)).with_relation(Relation::HasMany)
    });
    models.push(chapter);

    let descriptor = resolve(&models, AUTHOR).unwrap();
    let book = &descriptor.many_to_many[0].right;

    assert_eq!(book.has_many.len(), 1);
    assert_eq!(book.has_many_field("chapters").unwrap().child, CHAPTER);

    // A broken has-many on the target fails the whole resolution
    models[3].belongs_to = None;
    let err = resolve(&models, AUTHOR).unwrap_err();
    assert!(err.is_missing_belongs_to());
}

#[test]
fn self_referential_relation_is_rejected_by_default() {
    const PERSON: ModelId = ModelId(0);

    let models = vec![make_model(
        PERSON,
        "Person",
        vec![many_to_many("friends", PERSON)],
    )];

    let err = resolve(&models, PERSON).unwrap_err();
    let self_ref = err.as_self_referential_many_to_many().unwrap();
    assert_eq!(self_ref.model(), "Person");
    assert_eq!(self_ref.field(), "friends");
}

#[test]
fn self_referential_relation_resolves_to_a_leaf_when_allowed() {
    const PERSON: ModelId = ModelId(0);
    const PET: ModelId = ModelId(1);

    init_logging();

    let mut pet = make_model(PET, "Pet", vec![]);
    pet.belongs_to = Some(BelongsTo { target: PERSON });

    let models = vec![
        make_model(
            PERSON,
            "Person",
            vec![
                many_to_many("friends", PERSON),
                field("pets", Type::list(PET)).with_relation(Relation::HasMany),
            ],
        ),
        pet,
    ];

    let descriptor = Resolver::new(&models)
        .allow_self_referential_many_to_many(true)
        .resolve(PERSON)
        .unwrap();

    assert_eq!(descriptor.many_to_many.len(), 1);

    let friends = &descriptor.many_to_many[0];
    assert_eq!(friends.left, PERSON);
    assert_eq!(friends.right_model(), PERSON);
    assert_eq!(friends.right.has_many, descriptor.has_many);
    assert_eq!(friends.right.many_to_many, vec![]);
}

#[test]
fn unknown_root_model_is_invalid() {
    let models = author_book();

    let err = resolve(&models, ModelId(42)).unwrap_err();
    assert!(err.is_invalid_schema());
}
