//! Scenario-level coverage for `cfn_resolve::resolve`, combining intrinsics
//! the way a real template does rather than exercising each in isolation
//! (that coverage already lives in the per-module unit tests).

use cfn_resolve::{resolve, Environment, Value};
use im::HashMap;

fn map(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = HashMap::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Map(m)
}

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

fn env(params: Vec<(&str, Value)>) -> Environment {
    let mut p = HashMap::new();
    for (k, v) in params {
        p.insert(k.to_string(), v);
    }
    Environment::with_parameters(p)
}

#[test]
fn select_of_a_ref_picks_an_element_from_a_parameter_list() {
    let env = env(vec![(
        "DbSubnetIpBlocks",
        list(vec![
            Value::string("10.0.48.0/24"),
            Value::string("10.0.112.0/24"),
            Value::string("10.0.176.0/24"),
        ]),
    )]);
    let node = map(vec![(
        "Fn::Select",
        list(vec![Value::string("0"), map(vec![("Ref", Value::string("DbSubnetIpBlocks"))])]),
    )]);
    assert_eq!(resolve(&node, &env).unwrap(), Value::string("10.0.48.0/24"));
}

#[test]
fn join_interpolates_nested_refs() {
    let env = env(vec![
        ("Partition", Value::string("patata")),
        ("AWS::AccountId", Value::string("1234567890")),
    ]);
    let node = map(vec![(
        "Fn::Join",
        list(vec![
            Value::string(""),
            list(vec![
                Value::string("arn:"),
                map(vec![("Ref", Value::string("Partition"))]),
                Value::string(":s3:::elasticbeanstalk-*-"),
                map(vec![("Ref", Value::string("AWS::AccountId"))]),
            ]),
        ]),
    )]);
    assert_eq!(
        resolve(&node, &env).unwrap(),
        Value::string("arn:patata:s3:::elasticbeanstalk-*-1234567890")
    );
}

#[test]
fn sub_locals_may_themselves_be_refs() {
    let env = env(vec![("RootDomainName", Value::string("skyscanner.net"))]);
    let node = map(vec![(
        "Fn::Sub",
        list(vec![
            Value::string("www.${Domain}"),
            map(vec![("Domain", map(vec![("Ref", Value::string("RootDomainName"))]))]),
        ]),
    )]);
    assert_eq!(resolve(&node, &env).unwrap(), Value::string("www.skyscanner.net"));
}

#[test]
fn select_of_split_of_a_ref_chains_three_intrinsics() {
    let env = env(vec![("AccountSubnetIDs", Value::string("id1,id2,id3"))]);
    let node = map(vec![(
        "Fn::Select",
        list(vec![
            Value::string("2"),
            map(vec![(
                "Fn::Split",
                list(vec![Value::string(","), map(vec![("Ref", Value::string("AccountSubnetIDs"))])]),
            )]),
        ]),
    )]);
    assert_eq!(resolve(&node, &env).unwrap(), Value::string("id3"));
}

#[test]
fn find_in_map_key_can_be_supplied_by_a_ref() {
    let env = Environment {
        parameters: {
            let mut p = HashMap::new();
            p.insert("AWS::Region".to_string(), Value::string("us-east-1"));
            p
        },
        mappings: {
            let mut inner = HashMap::new();
            inner.insert("HVM64".to_string(), Value::string("ami-0ff8a91507f77f867"));
            let mut outer = HashMap::new();
            outer.insert("us-east-1".to_string(), inner);
            let mut mappings = HashMap::new();
            mappings.insert("RegionMap".to_string(), outer);
            mappings
        },
        conditions: HashMap::new(),
    };
    let node = map(vec![(
        "Fn::FindInMap",
        list(vec![
            Value::string("RegionMap"),
            map(vec![("Ref", Value::string("AWS::Region"))]),
            Value::string("HVM64"),
        ]),
    )]);
    assert_eq!(resolve(&node, &env).unwrap(), Value::string("ami-0ff8a91507f77f867"));
}

#[test]
fn equals_falls_back_to_string_comparison_for_non_numeric_non_date_strings() {
    // Neither side parses as a number or an ISO date, so `values_equal` must
    // fall all the way through to comparing `stringify()` output.
    let node = map(vec![(
        "Fn::Equals",
        list(vec![Value::string("us-east-1"), Value::string("us-east-1")]),
    )]);
    assert_eq!(resolve(&node, &Environment::new()).unwrap(), Value::Bool(true));

    let node = map(vec![(
        "Fn::Equals",
        list(vec![Value::string("us-east-1"), Value::string("eu-west-1")]),
    )]);
    assert_eq!(resolve(&node, &Environment::new()).unwrap(), Value::Bool(false));
}
