use super::*;
use shared::error::Result;

#[test]
fn test_tcp_type() -> Result<()> {
    let tcp_type = TcpType::from("passive");

    assert_eq!(TcpType::Unspecified, TcpType::default());
    assert_eq!(TcpType::from("active"), TcpType::Active);
    assert_eq!(tcp_type, TcpType::Passive);
    assert_eq!(TcpType::from("so"), TcpType::SimultaneousOpen);
    assert_eq!(TcpType::from("something else"), TcpType::Unspecified);

    assert_eq!(TcpType::Unspecified.to_string(), "unspecified");
    assert_eq!(TcpType::Active.to_string(), "active");
    assert_eq!(TcpType::Passive.to_string(), "passive");
    assert_eq!(TcpType::SimultaneousOpen.to_string(), "so");

    Ok(())
}

#[test]
fn test_tcp_type_serialization() {
    let tests = vec![
        (TcpType::Unspecified, "\"unspecified\""),
        (TcpType::Active, "\"active\""),
        (TcpType::Passive, "\"passive\""),
        (TcpType::SimultaneousOpen, "\"so\""),
    ];

    for (typ, expected) in tests {
        assert_eq!(
            serde_json::to_string(&typ).expect("serialize"),
            expected,
            "serialize {typ}"
        );
    }
}
