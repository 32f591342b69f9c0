use curlex_core::{OptionId, ValueShape};

use crate::ids;

pub(crate) fn registrations() -> Vec<(OptionId, ValueShape)> {
    vec![
        (ids::HAPPY_EYEBALLS_TIMEOUT_MS, ValueShape::Integer),
        (ids::KEEPALIVE_TIME, ValueShape::Integer),
        (ids::MAX_REDIRS, ValueShape::Integer),
        (ids::PARALLEL_MAX, ValueShape::Integer),
        (ids::RETRY, ValueShape::Integer),
        (ids::RETRY_DELAY, ValueShape::Integer),
        (ids::RETRY_MAX_TIME, ValueShape::Integer),
        (ids::SPEED_LIMIT, ValueShape::Integer),
        (ids::SPEED_TIME, ValueShape::Integer),
        (ids::CONNECT_TIMEOUT, ValueShape::Duration),
        (ids::EXPECT100_TIMEOUT, ValueShape::Duration),
        (ids::MAX_TIME, ValueShape::Duration),
        (ids::LIMIT_RATE, ValueShape::ByteSize),
        (ids::MAX_FILESIZE, ValueShape::ByteSize),
        (ids::SOCKS4, ValueShape::HostPort),
        (ids::SOCKS4A, ValueShape::HostPort),
        (ids::SOCKS5, ValueShape::HostPort),
        (ids::SOCKS5_HOSTNAME, ValueShape::HostPort),
        (ids::DATA_URLENCODE, ValueShape::KeyValue),
        (ids::FORM, ValueShape::KeyValue),
        (ids::FORM_STRING, ValueShape::KeyValue),
        (ids::TELNET_OPTION, ValueShape::KeyValue),
        (ids::RANGE, ValueShape::Range),
        (ids::RATE, ValueShape::Rate),
        // HOST1:PORT1:HOST2:PORT2, where either host may be empty.
        (
            ids::CONNECT_TO,
            ValueShape::ColonList {
                min: 4,
                max: Some(4),
            },
        ),
        // host:port:addr[,addr]...; IPv6 addresses are bracketed.
        (ids::RESOLVE, ValueShape::ColonList { min: 3, max: None }),
        (ids::DNS_SERVERS, ValueShape::CommaList),
        (ids::NOPROXY, ValueShape::CommaList),
    ]
}
