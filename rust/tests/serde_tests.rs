#![cfg(feature = "serde")]

//! JSON serialization tests for TreeMap.

use treemap::TreeMap;

#[test]
fn test_serialize_in_key_order() {
    let map: TreeMap<_, _> = [("c", 3), ("a", 1), ("b", 2)].into_iter().collect();
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"a":1,"b":2,"c":3}"#);
}

#[test]
fn test_serialize_empty() {
    let map: TreeMap<String, i32> = TreeMap::new();
    assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
}

#[test]
fn test_deserialize() {
    let map: TreeMap<String, i32> = serde_json::from_str(r#"{"b":2,"a":1,"c":3}"#).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&"a".to_string()), Some(&1));
    assert_eq!(
        map.keys(),
        [&"a".to_string(), &"b".to_string(), &"c".to_string()]
    );
    assert!(map.check_invariants());
}

#[test]
fn test_round_trip() {
    let original: TreeMap<_, _> = (0..50).map(|k| (k.to_string(), k)).collect();
    let json = serde_json::to_string(&original).unwrap();
    let restored: TreeMap<String, i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.entries(), original.entries());
}

#[test]
fn test_deserialize_rejects_non_map() {
    let result: Result<TreeMap<String, i32>, _> = serde_json::from_str("[1, 2, 3]");
    assert!(result.is_err());

    let result: Result<TreeMap<String, i32>, _> = serde_json::from_str(r#"{"a":"#);
    assert!(result.is_err());
}

#[test]
fn test_nested_values() {
    let mut map: TreeMap<String, Vec<i32>> = TreeMap::new();
    map.insert("evens".to_string(), vec![2, 4, 6]);
    map.insert("odds".to_string(), vec![1, 3, 5]);

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"evens":[2,4,6],"odds":[1,3,5]}"#);

    let restored: TreeMap<String, Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get(&"odds".to_string()), Some(&vec![1, 3, 5]));
}
