use ipgate_common::{IpRangeSet, RangeTokenError, parse_ip_range};
use pnet::ipnetwork::IpNetwork;
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr};

use crate::util::{masked, v4, v6};

fn networks(set: &IpRangeSet) -> Vec<IpNetwork> {
    set.iter().map(|r| r.as_ip_network()).collect()
}

#[test]
fn random_hosts_parse_as_full_prefix() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let ip = Ipv4Addr::from(rng.random::<u32>());
        let set = parse_ip_range(ip.to_string()).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.as_slice()[0].network(), IpAddr::V4(ip));
        assert_eq!(set.as_slice()[0].prefix(), 32);
    }
}

#[test]
fn random_cidr_blocks_keep_network_address() {
    let mut rng = rand::rng();

    for _ in 0..500 {
        let ip = Ipv4Addr::from(rng.random::<u32>());
        let prefix: u8 = rng.random_range(0..=32);
        let network = masked(ip, prefix);

        let set = parse_ip_range(format!("{network}/{prefix}")).unwrap();
        assert_eq!(set.as_slice()[0].network(), IpAddr::V4(network));
        assert_eq!(set.as_slice()[0].prefix(), prefix);

        // Same address with host bits left in is refused
        let err = parse_ip_range(format!("{ip}/{prefix}"));
        if ip == network {
            assert!(err.is_ok());
        } else {
            assert!(matches!(err.unwrap_err().reason, RangeTokenError::HostBitsSet(_)));
        }
    }
}

#[test]
fn mixed_list_keeps_input_order() {
    let set = parse_ip_range("fe80::/10, 192.168.0.0/16,127.0.0.1 ,::1").unwrap();

    assert_eq!(
        networks(&set),
        vec![
            v6("fe80::", 10),
            v4(192, 168, 0, 0, 16),
            v4(127, 0, 0, 1, 32),
            v6("::1", 128),
        ]
    );
}

#[test]
fn whitespace_is_trimmed_per_entry() {
    let plain = parse_ip_range("192.168.1.1,10.0.0.0/8").unwrap();

    for spec in [
        " 192.168.1.1 , 10.0.0.0/8 ",
        "\t192.168.1.1,\n10.0.0.0/8",
        "192.168.1.1 ,10.0.0.0/8\r\n",
    ] {
        assert_eq!(parse_ip_range(spec).unwrap(), plain, "spec: {spec:?}");
    }
}

#[test]
fn malformed_specifications_are_rejected() {
    for spec in [
        "",
        " ",
        ",",
        "10.0.0.1,,10.0.0.2",
        "999.1.1.1",
        "10.0.0.0/33",
        "abc",
        "10.0.0",
        "010.0.0.1",
        "10.0.0.1/24",
        "1.2.3.4-1.2.3.9",
        "10.0.0.0 /8",
        "fe80::1%eth0",
        "::/-1",
    ] {
        let err = parse_ip_range(spec).unwrap_err();
        assert!(
            err.to_string().starts_with("invalid IP range specification"),
            "unexpected message for {spec:?}: {err}"
        );
    }
}

#[test]
fn diagnostic_names_offending_entry() {
    let err = parse_ip_range("10.0.0.0/8, 192.168.1.300").unwrap_err();

    assert_eq!(err.token, "192.168.1.300");
    assert_eq!(
        err.to_string(),
        "invalid IP range specification '192.168.1.300': '192.168.1.300' is not a valid IPv4 or IPv6 address"
    );
}

#[test]
fn display_round_trips_through_parser() {
    let set = parse_ip_range("10.0.0.0/255.0.0.0, 2001:db8::/32, 8.8.8.8").unwrap();
    assert_eq!(set.to_string(), "10.0.0.0/8, 2001:db8::/32, 8.8.8.8/32");

    let again: IpRangeSet = set.to_string().parse().unwrap();
    assert_eq!(again, set);
}
