//! Canonical identities of the curl options.
//!
//! Every option is identified by its long name, without the leading dashes.
use curlex_core::OptionId;

/// `--abstract-unix-socket`
pub const ABSTRACT_UNIX_SOCKET: OptionId = OptionId::from_static("abstract-unix-socket");
/// `--alt-svc`
pub const ALT_SVC: OptionId = OptionId::from_static("alt-svc");
/// `--anyauth`
pub const ANYAUTH: OptionId = OptionId::from_static("anyauth");
/// `-a`, `--append`
pub const APPEND: OptionId = OptionId::from_static("append");
/// `--aws-sigv4`
pub const AWS_SIGV4: OptionId = OptionId::from_static("aws-sigv4");
/// `--basic`
pub const BASIC: OptionId = OptionId::from_static("basic");
/// `--cacert`
pub const CACERT: OptionId = OptionId::from_static("cacert");
/// `--capath`
pub const CAPATH: OptionId = OptionId::from_static("capath");
/// `-E`, `--cert`
pub const CERT: OptionId = OptionId::from_static("cert");
/// `--cert-status`
pub const CERT_STATUS: OptionId = OptionId::from_static("cert-status");
/// `--cert-type`
pub const CERT_TYPE: OptionId = OptionId::from_static("cert-type");
/// `--ciphers`
pub const CIPHERS: OptionId = OptionId::from_static("ciphers");
/// `--compressed`
pub const COMPRESSED: OptionId = OptionId::from_static("compressed");
/// `--compressed-ssh`
pub const COMPRESSED_SSH: OptionId = OptionId::from_static("compressed-ssh");
/// `-K`, `--config`
pub const CONFIG: OptionId = OptionId::from_static("config");
/// `--connect-timeout`
pub const CONNECT_TIMEOUT: OptionId = OptionId::from_static("connect-timeout");
/// `--connect-to`
pub const CONNECT_TO: OptionId = OptionId::from_static("connect-to");
/// `-C`, `--continue-at`
pub const CONTINUE_AT: OptionId = OptionId::from_static("continue-at");
/// `-b`, `--cookie`
pub const COOKIE: OptionId = OptionId::from_static("cookie");
/// `-c`, `--cookie-jar`
pub const COOKIE_JAR: OptionId = OptionId::from_static("cookie-jar");
/// `--create-dirs`
pub const CREATE_DIRS: OptionId = OptionId::from_static("create-dirs");
/// `--create-file-mode`
pub const CREATE_FILE_MODE: OptionId = OptionId::from_static("create-file-mode");
/// `--crlf`
pub const CRLF: OptionId = OptionId::from_static("crlf");
/// `--crlfile`
pub const CRLFILE: OptionId = OptionId::from_static("crlfile");
/// `-d`, `--data`
pub const DATA: OptionId = OptionId::from_static("data");
/// `--data-ascii`
pub const DATA_ASCII: OptionId = OptionId::from_static("data-ascii");
/// `--data-binary`
pub const DATA_BINARY: OptionId = OptionId::from_static("data-binary");
/// `--data-raw`
pub const DATA_RAW: OptionId = OptionId::from_static("data-raw");
/// `--data-urlencode`
pub const DATA_URLENCODE: OptionId = OptionId::from_static("data-urlencode");
/// `--digest`
pub const DIGEST: OptionId = OptionId::from_static("digest");
/// `-q`, `--disable`
pub const DISABLE: OptionId = OptionId::from_static("disable");
/// `--disable-eprt`
pub const DISABLE_EPRT: OptionId = OptionId::from_static("disable-eprt");
/// `--disable-epsv`
pub const DISABLE_EPSV: OptionId = OptionId::from_static("disable-epsv");
/// `--disallow-username-in-url`
pub const DISALLOW_USERNAME_IN_URL: OptionId = OptionId::from_static("disallow-username-in-url");
/// `--dns-interface`
pub const DNS_INTERFACE: OptionId = OptionId::from_static("dns-interface");
/// `--dns-ipv4-addr`
pub const DNS_IPV4_ADDR: OptionId = OptionId::from_static("dns-ipv4-addr");
/// `--dns-ipv6-addr`
pub const DNS_IPV6_ADDR: OptionId = OptionId::from_static("dns-ipv6-addr");
/// `--dns-servers`
pub const DNS_SERVERS: OptionId = OptionId::from_static("dns-servers");
/// `--doh-url`
pub const DOH_URL: OptionId = OptionId::from_static("doh-url");
/// `-D`, `--dump-header`
pub const DUMP_HEADER: OptionId = OptionId::from_static("dump-header");
/// `--etag-compare`
pub const ETAG_COMPARE: OptionId = OptionId::from_static("etag-compare");
/// `--etag-save`
pub const ETAG_SAVE: OptionId = OptionId::from_static("etag-save");
/// `--expect100-timeout`
pub const EXPECT100_TIMEOUT: OptionId = OptionId::from_static("expect100-timeout");
/// `-f`, `--fail`
pub const FAIL: OptionId = OptionId::from_static("fail");
/// `--fail-early`
pub const FAIL_EARLY: OptionId = OptionId::from_static("fail-early");
/// `--fail-with-body`
pub const FAIL_WITH_BODY: OptionId = OptionId::from_static("fail-with-body");
/// `--false-start`
pub const FALSE_START: OptionId = OptionId::from_static("false-start");
/// `-F`, `--form`
pub const FORM: OptionId = OptionId::from_static("form");
/// `--form-escape`
pub const FORM_ESCAPE: OptionId = OptionId::from_static("form-escape");
/// `--form-string`
pub const FORM_STRING: OptionId = OptionId::from_static("form-string");
/// `--ftp-pasv`
pub const FTP_PASV: OptionId = OptionId::from_static("ftp-pasv");
/// `-P`, `--ftp-port`
pub const FTP_PORT: OptionId = OptionId::from_static("ftp-port");
/// `-G`, `--get`
pub const GET: OptionId = OptionId::from_static("get");
/// `-g`, `--globoff`
pub const GLOBOFF: OptionId = OptionId::from_static("globoff");
/// `--happy-eyeballs-timeout-ms`
pub const HAPPY_EYEBALLS_TIMEOUT_MS: OptionId = OptionId::from_static("happy-eyeballs-timeout-ms");
/// `--haproxy-protocol`
pub const HAPROXY_PROTOCOL: OptionId = OptionId::from_static("haproxy-protocol");
/// `-I`, `--head`
pub const HEAD: OptionId = OptionId::from_static("head");
/// `-H`, `--header`
pub const HEADER: OptionId = OptionId::from_static("header");
/// `-h`, `--help`
pub const HELP: OptionId = OptionId::from_static("help");
/// `--hsts`
pub const HSTS: OptionId = OptionId::from_static("hsts");
/// `--http0.9`
pub const HTTP0_9: OptionId = OptionId::from_static("http0.9");
/// `-0`, `--http1.0`
pub const HTTP1_0: OptionId = OptionId::from_static("http1.0");
/// `--http1.1`
pub const HTTP1_1: OptionId = OptionId::from_static("http1.1");
/// `--http2`
pub const HTTP2: OptionId = OptionId::from_static("http2");
/// `--http2-prior-knowledge`
pub const HTTP2_PRIOR_KNOWLEDGE: OptionId = OptionId::from_static("http2-prior-knowledge");
/// `--http3`
pub const HTTP3: OptionId = OptionId::from_static("http3");
/// `--ignore-content-length`
pub const IGNORE_CONTENT_LENGTH: OptionId = OptionId::from_static("ignore-content-length");
/// `-i`, `--include`
pub const INCLUDE: OptionId = OptionId::from_static("include");
/// `-k`, `--insecure`
pub const INSECURE: OptionId = OptionId::from_static("insecure");
/// `--interface`
pub const INTERFACE: OptionId = OptionId::from_static("interface");
/// `-4`, `--ipv4`
pub const IPV4: OptionId = OptionId::from_static("ipv4");
/// `-6`, `--ipv6`
pub const IPV6: OptionId = OptionId::from_static("ipv6");
/// `--json`
pub const JSON: OptionId = OptionId::from_static("json");
/// `-j`, `--junk-session-cookies`
pub const JUNK_SESSION_COOKIES: OptionId = OptionId::from_static("junk-session-cookies");
/// `--keepalive-time`
pub const KEEPALIVE_TIME: OptionId = OptionId::from_static("keepalive-time");
/// `--key`
pub const KEY: OptionId = OptionId::from_static("key");
/// `--key-type`
pub const KEY_TYPE: OptionId = OptionId::from_static("key-type");
/// `--limit-rate`
pub const LIMIT_RATE: OptionId = OptionId::from_static("limit-rate");
/// `-l`, `--list-only`
pub const LIST_ONLY: OptionId = OptionId::from_static("list-only");
/// `--local-port`
pub const LOCAL_PORT: OptionId = OptionId::from_static("local-port");
/// `-L`, `--location`
pub const LOCATION: OptionId = OptionId::from_static("location");
/// `--location-trusted`
pub const LOCATION_TRUSTED: OptionId = OptionId::from_static("location-trusted");
/// `-M`, `--manual`
pub const MANUAL: OptionId = OptionId::from_static("manual");
/// `--max-filesize`
pub const MAX_FILESIZE: OptionId = OptionId::from_static("max-filesize");
/// `--max-redirs`
pub const MAX_REDIRS: OptionId = OptionId::from_static("max-redirs");
/// `-m`, `--max-time`
pub const MAX_TIME: OptionId = OptionId::from_static("max-time");
/// `--negotiate`
pub const NEGOTIATE: OptionId = OptionId::from_static("negotiate");
/// `-n`, `--netrc`
pub const NETRC: OptionId = OptionId::from_static("netrc");
/// `--netrc-file`
pub const NETRC_FILE: OptionId = OptionId::from_static("netrc-file");
/// `--netrc-optional`
pub const NETRC_OPTIONAL: OptionId = OptionId::from_static("netrc-optional");
/// `-:`, `--next`
pub const NEXT: OptionId = OptionId::from_static("next");
/// `--no-alpn`
pub const NO_ALPN: OptionId = OptionId::from_static("no-alpn");
/// `-N`, `--no-buffer`
pub const NO_BUFFER: OptionId = OptionId::from_static("no-buffer");
/// `--no-keepalive`
pub const NO_KEEPALIVE: OptionId = OptionId::from_static("no-keepalive");
/// `--no-npn`
pub const NO_NPN: OptionId = OptionId::from_static("no-npn");
/// `--no-progress-meter`
pub const NO_PROGRESS_METER: OptionId = OptionId::from_static("no-progress-meter");
/// `--no-sessionid`
pub const NO_SESSIONID: OptionId = OptionId::from_static("no-sessionid");
/// `--noproxy`
pub const NOPROXY: OptionId = OptionId::from_static("noproxy");
/// `--ntlm`
pub const NTLM: OptionId = OptionId::from_static("ntlm");
/// `--oauth2-bearer`
pub const OAUTH2_BEARER: OptionId = OptionId::from_static("oauth2-bearer");
/// `-o`, `--output`
pub const OUTPUT: OptionId = OptionId::from_static("output");
/// `--output-dir`
pub const OUTPUT_DIR: OptionId = OptionId::from_static("output-dir");
/// `-Z`, `--parallel`
pub const PARALLEL: OptionId = OptionId::from_static("parallel");
/// `--parallel-immediate`
pub const PARALLEL_IMMEDIATE: OptionId = OptionId::from_static("parallel-immediate");
/// `--parallel-max`
pub const PARALLEL_MAX: OptionId = OptionId::from_static("parallel-max");
/// `--pass`
pub const PASS: OptionId = OptionId::from_static("pass");
/// `--path-as-is`
pub const PATH_AS_IS: OptionId = OptionId::from_static("path-as-is");
/// `--pinnedpubkey`
pub const PINNEDPUBKEY: OptionId = OptionId::from_static("pinnedpubkey");
/// `--post301`
pub const POST301: OptionId = OptionId::from_static("post301");
/// `--post302`
pub const POST302: OptionId = OptionId::from_static("post302");
/// `--post303`
pub const POST303: OptionId = OptionId::from_static("post303");
/// `-#`, `--progress-bar`
pub const PROGRESS_BAR: OptionId = OptionId::from_static("progress-bar");
/// `--proto`
pub const PROTO: OptionId = OptionId::from_static("proto");
/// `--proto-default`
pub const PROTO_DEFAULT: OptionId = OptionId::from_static("proto-default");
/// `--proto-redir`
pub const PROTO_REDIR: OptionId = OptionId::from_static("proto-redir");
/// `-x`, `--proxy`
pub const PROXY: OptionId = OptionId::from_static("proxy");
/// `--proxy-header`
pub const PROXY_HEADER: OptionId = OptionId::from_static("proxy-header");
/// `--proxy-insecure`
pub const PROXY_INSECURE: OptionId = OptionId::from_static("proxy-insecure");
/// `-U`, `--proxy-user`
pub const PROXY_USER: OptionId = OptionId::from_static("proxy-user");
/// `-p`, `--proxytunnel`
pub const PROXYTUNNEL: OptionId = OptionId::from_static("proxytunnel");
/// `-Q`, `--quote`
pub const QUOTE: OptionId = OptionId::from_static("quote");
/// `-r`, `--range`
pub const RANGE: OptionId = OptionId::from_static("range");
/// `--rate`
pub const RATE: OptionId = OptionId::from_static("rate");
/// `--raw`
pub const RAW: OptionId = OptionId::from_static("raw");
/// `-e`, `--referer`
pub const REFERER: OptionId = OptionId::from_static("referer");
/// `-J`, `--remote-header-name`
pub const REMOTE_HEADER_NAME: OptionId = OptionId::from_static("remote-header-name");
/// `-O`, `--remote-name`
pub const REMOTE_NAME: OptionId = OptionId::from_static("remote-name");
/// `--remote-name-all`
pub const REMOTE_NAME_ALL: OptionId = OptionId::from_static("remote-name-all");
/// `-R`, `--remote-time`
pub const REMOTE_TIME: OptionId = OptionId::from_static("remote-time");
/// `-X`, `--request`
pub const REQUEST: OptionId = OptionId::from_static("request");
/// `--request-target`
pub const REQUEST_TARGET: OptionId = OptionId::from_static("request-target");
/// `--resolve`
pub const RESOLVE: OptionId = OptionId::from_static("resolve");
/// `--retry`
pub const RETRY: OptionId = OptionId::from_static("retry");
/// `--retry-all-errors`
pub const RETRY_ALL_ERRORS: OptionId = OptionId::from_static("retry-all-errors");
/// `--retry-connrefused`
pub const RETRY_CONNREFUSED: OptionId = OptionId::from_static("retry-connrefused");
/// `--retry-delay`
pub const RETRY_DELAY: OptionId = OptionId::from_static("retry-delay");
/// `--retry-max-time`
pub const RETRY_MAX_TIME: OptionId = OptionId::from_static("retry-max-time");
/// `--sasl-ir`
pub const SASL_IR: OptionId = OptionId::from_static("sasl-ir");
/// `--service-name`
pub const SERVICE_NAME: OptionId = OptionId::from_static("service-name");
/// `-S`, `--show-error`
pub const SHOW_ERROR: OptionId = OptionId::from_static("show-error");
/// `-s`, `--silent`
pub const SILENT: OptionId = OptionId::from_static("silent");
/// `--socks4`
pub const SOCKS4: OptionId = OptionId::from_static("socks4");
/// `--socks4a`
pub const SOCKS4A: OptionId = OptionId::from_static("socks4a");
/// `--socks5`
pub const SOCKS5: OptionId = OptionId::from_static("socks5");
/// `--socks5-hostname`
pub const SOCKS5_HOSTNAME: OptionId = OptionId::from_static("socks5-hostname");
/// `-Y`, `--speed-limit`
pub const SPEED_LIMIT: OptionId = OptionId::from_static("speed-limit");
/// `-y`, `--speed-time`
pub const SPEED_TIME: OptionId = OptionId::from_static("speed-time");
/// `--ssl`
pub const SSL: OptionId = OptionId::from_static("ssl");
/// `--ssl-reqd`
pub const SSL_REQD: OptionId = OptionId::from_static("ssl-reqd");
/// `-2`, `--sslv2`
pub const SSLV2: OptionId = OptionId::from_static("sslv2");
/// `-3`, `--sslv3`
pub const SSLV3: OptionId = OptionId::from_static("sslv3");
/// `--stderr`
pub const STDERR: OptionId = OptionId::from_static("stderr");
/// `--styled-output`
pub const STYLED_OUTPUT: OptionId = OptionId::from_static("styled-output");
/// `--tcp-fastopen`
pub const TCP_FASTOPEN: OptionId = OptionId::from_static("tcp-fastopen");
/// `--tcp-nodelay`
pub const TCP_NODELAY: OptionId = OptionId::from_static("tcp-nodelay");
/// `-t`, `--telnet-option`
pub const TELNET_OPTION: OptionId = OptionId::from_static("telnet-option");
/// `-z`, `--time-cond`
pub const TIME_COND: OptionId = OptionId::from_static("time-cond");
/// `--tls-max`
pub const TLS_MAX: OptionId = OptionId::from_static("tls-max");
/// `-1`, `--tlsv1`
pub const TLSV1: OptionId = OptionId::from_static("tlsv1");
/// `--tlsv1.2`
pub const TLSV1_2: OptionId = OptionId::from_static("tlsv1.2");
/// `--tlsv1.3`
pub const TLSV1_3: OptionId = OptionId::from_static("tlsv1.3");
/// `--tr-encoding`
pub const TR_ENCODING: OptionId = OptionId::from_static("tr-encoding");
/// `--trace`
pub const TRACE: OptionId = OptionId::from_static("trace");
/// `--trace-ascii`
pub const TRACE_ASCII: OptionId = OptionId::from_static("trace-ascii");
/// `--trace-time`
pub const TRACE_TIME: OptionId = OptionId::from_static("trace-time");
/// `--unix-socket`
pub const UNIX_SOCKET: OptionId = OptionId::from_static("unix-socket");
/// `-T`, `--upload-file`
pub const UPLOAD_FILE: OptionId = OptionId::from_static("upload-file");
/// `--url`
pub const URL: OptionId = OptionId::from_static("url");
/// `--url-query`
pub const URL_QUERY: OptionId = OptionId::from_static("url-query");
/// `-B`, `--use-ascii`
pub const USE_ASCII: OptionId = OptionId::from_static("use-ascii");
/// `-u`, `--user`
pub const USER: OptionId = OptionId::from_static("user");
/// `-A`, `--user-agent`
pub const USER_AGENT: OptionId = OptionId::from_static("user-agent");
/// `-v`, `--verbose`
pub const VERBOSE: OptionId = OptionId::from_static("verbose");
/// `-V`, `--version`
pub const VERSION: OptionId = OptionId::from_static("version");
/// `-w`, `--write-out`
pub const WRITE_OUT: OptionId = OptionId::from_static("write-out");
/// `--xattr`
pub const XATTR: OptionId = OptionId::from_static("xattr");
