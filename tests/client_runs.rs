use abstract_factory::{client_method, run, AbstractFactory, ConcreteFactory1, ConcreteFactory2};

#[test]
fn test_run_writes_both_families_in_order() {
    let mut out = Vec::new();
    run(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "The result of the product B1.",
            "The result of the B1 collaborating with the (The result of the product A1.)",
            "The result of the product B2.",
            "The result of the B2 collaborating with the (The result of the product A2.)",
        ]
    );
}

#[test]
fn test_client_accepts_any_factory() {
    let factories: Vec<Box<dyn AbstractFactory>> =
        vec![Box::new(ConcreteFactory1), Box::new(ConcreteFactory2)];

    let mut out = Vec::new();
    for factory in &factories {
        client_method(factory.as_ref(), &mut out).unwrap();
    }

    let mut expected = Vec::new();
    run(&mut expected).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_family_factory_matches_concrete_factory() {
    use abstract_factory::Family;

    let via_family = abstract_factory::describe(&*Family::Two.factory());
    let direct = abstract_factory::describe(&ConcreteFactory2);
    assert_eq!(via_family, direct);
}
