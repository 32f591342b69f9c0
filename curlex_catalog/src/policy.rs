use curlex_core::{OptionId, RepeatPolicy};

use crate::ids;

// Flags; repeating one changes nothing.
static UNIQUE: &[OptionId] = &[
    ids::ANYAUTH,
    ids::APPEND,
    ids::BASIC,
    ids::CERT_STATUS,
    ids::COMPRESSED,
    ids::COMPRESSED_SSH,
    ids::CREATE_DIRS,
    ids::CRLF,
    ids::DIGEST,
    ids::DISABLE,
    ids::DISABLE_EPRT,
    ids::DISABLE_EPSV,
    ids::DISALLOW_USERNAME_IN_URL,
    ids::FAIL,
    ids::FAIL_EARLY,
    ids::FAIL_WITH_BODY,
    ids::FALSE_START,
    ids::FORM_ESCAPE,
    ids::FTP_PASV,
    ids::GET,
    ids::GLOBOFF,
    ids::HAPROXY_PROTOCOL,
    ids::HEAD,
    ids::HELP,
    ids::HTTP0_9,
    ids::HTTP1_0,
    ids::HTTP1_1,
    ids::HTTP2,
    ids::HTTP2_PRIOR_KNOWLEDGE,
    ids::HTTP3,
    ids::IGNORE_CONTENT_LENGTH,
    ids::INCLUDE,
    ids::INSECURE,
    ids::IPV4,
    ids::IPV6,
    ids::JUNK_SESSION_COOKIES,
    ids::LIST_ONLY,
    ids::LOCATION,
    ids::LOCATION_TRUSTED,
    ids::MANUAL,
    ids::NEGOTIATE,
    ids::NETRC,
    ids::NETRC_OPTIONAL,
    ids::NEXT,
    ids::NO_ALPN,
    ids::NO_BUFFER,
    ids::NO_KEEPALIVE,
    ids::NO_NPN,
    ids::NO_PROGRESS_METER,
    ids::NO_SESSIONID,
    ids::NTLM,
    ids::PARALLEL,
    ids::PARALLEL_IMMEDIATE,
    ids::PATH_AS_IS,
    ids::POST301,
    ids::POST302,
    ids::POST303,
    ids::PROGRESS_BAR,
    ids::PROXY_INSECURE,
    ids::PROXYTUNNEL,
    ids::RAW,
    ids::REMOTE_HEADER_NAME,
    ids::REMOTE_NAME,
    ids::REMOTE_NAME_ALL,
    ids::REMOTE_TIME,
    ids::RETRY_ALL_ERRORS,
    ids::RETRY_CONNREFUSED,
    ids::SASL_IR,
    ids::SHOW_ERROR,
    ids::SILENT,
    ids::SSL,
    ids::SSL_REQD,
    ids::SSLV2,
    ids::SSLV3,
    ids::STYLED_OUTPUT,
    ids::TCP_FASTOPEN,
    ids::TCP_NODELAY,
    ids::TLSV1,
    ids::TLSV1_2,
    ids::TLSV1_3,
    ids::TR_ENCODING,
    ids::TRACE_TIME,
    ids::USE_ASCII,
    ids::VERBOSE,
    ids::VERSION,
    ids::XATTR,
];

// A later occurrence overrides an earlier one.
static LAST_ONLY: &[OptionId] = &[
    ids::ABSTRACT_UNIX_SOCKET,
    ids::ALT_SVC,
    ids::AWS_SIGV4,
    ids::CACERT,
    ids::CAPATH,
    ids::CERT,
    ids::CERT_TYPE,
    ids::CIPHERS,
    ids::CONNECT_TIMEOUT,
    ids::CONTINUE_AT,
    ids::COOKIE_JAR,
    ids::CREATE_FILE_MODE,
    ids::CRLFILE,
    ids::DNS_INTERFACE,
    ids::DNS_IPV4_ADDR,
    ids::DNS_IPV6_ADDR,
    ids::DNS_SERVERS,
    ids::DOH_URL,
    ids::DUMP_HEADER,
    ids::ETAG_COMPARE,
    ids::ETAG_SAVE,
    ids::EXPECT100_TIMEOUT,
    ids::FTP_PORT,
    ids::HAPPY_EYEBALLS_TIMEOUT_MS,
    ids::HSTS,
    ids::INTERFACE,
    ids::KEEPALIVE_TIME,
    ids::KEY,
    ids::KEY_TYPE,
    ids::LIMIT_RATE,
    ids::LOCAL_PORT,
    ids::MAX_FILESIZE,
    ids::MAX_REDIRS,
    ids::MAX_TIME,
    ids::NETRC_FILE,
    ids::NOPROXY,
    ids::OAUTH2_BEARER,
    ids::OUTPUT_DIR,
    ids::PARALLEL_MAX,
    ids::PASS,
    ids::PINNEDPUBKEY,
    ids::PROTO,
    ids::PROTO_DEFAULT,
    ids::PROTO_REDIR,
    ids::PROXY,
    ids::PROXY_USER,
    ids::RANGE,
    ids::RATE,
    ids::REFERER,
    ids::REQUEST,
    ids::REQUEST_TARGET,
    ids::RETRY,
    ids::RETRY_DELAY,
    ids::RETRY_MAX_TIME,
    ids::SERVICE_NAME,
    ids::SOCKS4,
    ids::SOCKS4A,
    ids::SOCKS5,
    ids::SOCKS5_HOSTNAME,
    ids::SPEED_LIMIT,
    ids::SPEED_TIME,
    ids::STDERR,
    ids::TIME_COND,
    ids::TLS_MAX,
    ids::TRACE,
    ids::TRACE_ASCII,
    ids::UNIX_SOCKET,
    ids::USER,
    ids::USER_AGENT,
    ids::WRITE_OUT,
];

// Every occurrence contributes.
static MULTIPLE: &[OptionId] = &[
    ids::CONFIG,
    ids::CONNECT_TO,
    ids::COOKIE,
    ids::DATA,
    ids::DATA_ASCII,
    ids::DATA_BINARY,
    ids::DATA_RAW,
    ids::DATA_URLENCODE,
    ids::FORM,
    ids::FORM_STRING,
    ids::HEADER,
    ids::JSON,
    ids::OUTPUT,
    ids::PROXY_HEADER,
    ids::QUOTE,
    ids::RESOLVE,
    ids::TELNET_OPTION,
    ids::UPLOAD_FILE,
    ids::URL,
    ids::URL_QUERY,
];

fn declare(
    ids: &'static [OptionId],
    policy: RepeatPolicy,
) -> impl Iterator<Item = (OptionId, RepeatPolicy)> {
    ids.iter().map(move |id| (id.clone(), policy))
}

pub(crate) fn declarations() -> impl Iterator<Item = (OptionId, RepeatPolicy)> {
    declare(UNIQUE, RepeatPolicy::Unique)
        .chain(declare(LAST_ONLY, RepeatPolicy::LastOnly))
        .chain(declare(MULTIPLE, RepeatPolicy::Multiple))
}
