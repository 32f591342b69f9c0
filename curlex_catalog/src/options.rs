use curlex_core::{OptionDefinition, OptionId};

use crate::ids;

fn aliases(id: &OptionId, short: Option<&str>) -> Vec<String> {
    short
        .map(str::to_string)
        .into_iter()
        .chain(std::iter::once(format!("--{id}")))
        .collect()
}

fn flag(id: OptionId, short: Option<&str>, help: &str) -> OptionDefinition {
    let aliases = aliases(&id, short);
    OptionDefinition::new(id, aliases).help(help)
}

fn argument(id: OptionId, short: Option<&str>, name: &str, help: &str) -> OptionDefinition {
    let aliases = aliases(&id, short);
    OptionDefinition::new(id, aliases).argument(name).help(help)
}

// Help texts follow `curl --help all`.
pub(crate) fn definitions() -> Vec<OptionDefinition> {
    vec![
        argument(
            ids::ABSTRACT_UNIX_SOCKET,
            None,
            "path",
            "Connect via abstract Unix domain socket",
        ),
        argument(ids::ALT_SVC, None, "file name", "Enable alt-svc with this cache file"),
        flag(ids::ANYAUTH, None, "Pick any authentication method"),
        flag(ids::APPEND, Some("-a"), "Append to target file when uploading"),
        argument(
            ids::AWS_SIGV4,
            None,
            "provider1[:provider2[:region[:service]]]",
            "Use AWS V4 signature authentication",
        ),
        flag(ids::BASIC, None, "Use HTTP Basic Authentication"),
        argument(ids::CACERT, None, "file", "CA certificate to verify peer against"),
        argument(ids::CAPATH, None, "dir", "CA directory to verify peer against"),
        argument(
            ids::CERT,
            Some("-E"),
            "certificate[:password]",
            "Client certificate file and password",
        ),
        flag(ids::CERT_STATUS, None, "Verify the status of the server cert via OCSP-staple"),
        argument(ids::CERT_TYPE, None, "type", "Certificate type (DER/PEM/ENG/P12)"),
        argument(ids::CIPHERS, None, "list of ciphers", "SSL ciphers to use"),
        flag(ids::COMPRESSED, None, "Request compressed response"),
        flag(ids::COMPRESSED_SSH, None, "Enable SSH compression"),
        argument(ids::CONFIG, Some("-K"), "file", "Read config from a file"),
        argument(
            ids::CONNECT_TIMEOUT,
            None,
            "fractional seconds",
            "Maximum time allowed for connection",
        ),
        argument(ids::CONNECT_TO, None, "HOST1:PORT1:HOST2:PORT2", "Connect to host"),
        argument(ids::CONTINUE_AT, Some("-C"), "offset", "Resumed transfer offset"),
        argument(ids::COOKIE, Some("-b"), "data|filename", "Send cookies from string/file"),
        argument(
            ids::COOKIE_JAR,
            Some("-c"),
            "filename",
            "Write cookies to <filename> after operation",
        ),
        flag(ids::CREATE_DIRS, None, "Create necessary local directory hierarchy"),
        argument(ids::CREATE_FILE_MODE, None, "mode", "File mode for created files"),
        flag(ids::CRLF, None, "Convert LF to CRLF in upload"),
        argument(ids::CRLFILE, None, "file", "Use this CRL list"),
        argument(ids::DATA, Some("-d"), "data", "HTTP POST data"),
        argument(ids::DATA_ASCII, None, "data", "HTTP POST ASCII data"),
        argument(ids::DATA_BINARY, None, "data", "HTTP POST binary data"),
        argument(ids::DATA_RAW, None, "data", "HTTP POST data, '@' allowed"),
        argument(ids::DATA_URLENCODE, None, "data", "HTTP POST data URL encoded"),
        flag(ids::DIGEST, None, "Use HTTP Digest Authentication"),
        flag(ids::DISABLE, Some("-q"), "Disable .curlrc"),
        flag(ids::DISABLE_EPRT, None, "Inhibit using EPRT or LPRT"),
        flag(ids::DISABLE_EPSV, None, "Inhibit using EPSV"),
        flag(ids::DISALLOW_USERNAME_IN_URL, None, "Disallow username in URL"),
        argument(ids::DNS_INTERFACE, None, "interface", "Interface to use for DNS requests"),
        argument(ids::DNS_IPV4_ADDR, None, "address", "IPv4 address to use for DNS requests"),
        argument(ids::DNS_IPV6_ADDR, None, "address", "IPv6 address to use for DNS requests"),
        argument(ids::DNS_SERVERS, None, "addresses", "DNS server addrs to use"),
        argument(ids::DOH_URL, None, "URL", "Resolve host names over DoH"),
        argument(
            ids::DUMP_HEADER,
            Some("-D"),
            "filename",
            "Write the received headers to <filename>",
        ),
        argument(ids::ETAG_COMPARE, None, "file", "Pass an ETag from a file as a custom header"),
        argument(ids::ETAG_SAVE, None, "file", "Parse ETag from a request and save it to a file"),
        argument(ids::EXPECT100_TIMEOUT, None, "seconds", "How long to wait for 100-continue"),
        flag(ids::FAIL, Some("-f"), "Fail fast with no output on HTTP errors"),
        flag(ids::FAIL_EARLY, None, "Fail on first transfer error, do not continue"),
        flag(ids::FAIL_WITH_BODY, None, "Fail on HTTP errors but save the body"),
        flag(ids::FALSE_START, None, "Enable TLS False Start"),
        argument(ids::FORM, Some("-F"), "name=content", "Specify multipart MIME data"),
        flag(ids::FORM_ESCAPE, None, "Escape multipart form field/file names using backslash"),
        argument(ids::FORM_STRING, None, "name=string", "Specify multipart MIME data"),
        flag(ids::FTP_PASV, None, "Use PASV/EPSV instead of PORT"),
        argument(ids::FTP_PORT, Some("-P"), "address", "Use PORT instead of PASV"),
        flag(ids::GET, Some("-G"), "Put the post data in the URL and use GET"),
        flag(ids::GLOBOFF, Some("-g"), "Disable URL sequences and ranges using {} and []"),
        argument(
            ids::HAPPY_EYEBALLS_TIMEOUT_MS,
            None,
            "milliseconds",
            "Time for IPv6 before trying IPv4",
        ),
        flag(ids::HAPROXY_PROTOCOL, None, "Send HAProxy PROXY protocol v1 header"),
        flag(ids::HEAD, Some("-I"), "Show document info only"),
        argument(ids::HEADER, Some("-H"), "header/@file", "Pass custom header(s) to server"),
        flag(ids::HELP, Some("-h"), "Get help for commands"),
        argument(ids::HSTS, None, "file name", "Enable HSTS with this cache file"),
        flag(ids::HTTP0_9, None, "Allow HTTP 0.9 responses"),
        flag(ids::HTTP1_0, Some("-0"), "Use HTTP 1.0"),
        flag(ids::HTTP1_1, None, "Use HTTP 1.1"),
        flag(ids::HTTP2, None, "Use HTTP 2"),
        flag(ids::HTTP2_PRIOR_KNOWLEDGE, None, "Use HTTP 2 without HTTP/1.1 Upgrade"),
        flag(ids::HTTP3, None, "Use HTTP v3"),
        flag(ids::IGNORE_CONTENT_LENGTH, None, "Ignore the size of the remote resource"),
        flag(ids::INCLUDE, Some("-i"), "Include protocol response headers in the output"),
        flag(ids::INSECURE, Some("-k"), "Allow insecure server connections"),
        argument(ids::INTERFACE, None, "name", "Use network INTERFACE (or address)"),
        flag(ids::IPV4, Some("-4"), "Resolve names to IPv4 addresses"),
        flag(ids::IPV6, Some("-6"), "Resolve names to IPv6 addresses"),
        argument(ids::JSON, None, "data", "HTTP POST JSON"),
        flag(ids::JUNK_SESSION_COOKIES, Some("-j"), "Ignore session cookies read from file"),
        argument(ids::KEEPALIVE_TIME, None, "seconds", "Interval time for keepalive probes"),
        argument(ids::KEY, None, "key", "Private key file name"),
        argument(ids::KEY_TYPE, None, "type", "Private key file type (DER/PEM/ENG)"),
        argument(ids::LIMIT_RATE, None, "speed", "Limit transfer speed to RATE"),
        flag(ids::LIST_ONLY, Some("-l"), "List only mode"),
        argument(ids::LOCAL_PORT, None, "num/range", "Force use of RANGE for local port numbers"),
        flag(ids::LOCATION, Some("-L"), "Follow redirects"),
        flag(ids::LOCATION_TRUSTED, None, "Like --location, and send auth to other hosts"),
        flag(ids::MANUAL, Some("-M"), "Display the full manual"),
        argument(ids::MAX_FILESIZE, None, "bytes", "Maximum file size to download"),
        argument(ids::MAX_REDIRS, None, "num", "Maximum number of redirects allowed"),
        argument(
            ids::MAX_TIME,
            Some("-m"),
            "fractional seconds",
            "Maximum time allowed for transfer",
        ),
        flag(ids::NEGOTIATE, None, "Use HTTP Negotiate (SPNEGO) authentication"),
        flag(ids::NETRC, Some("-n"), "Must read .netrc for user name and password"),
        argument(ids::NETRC_FILE, None, "filename", "Specify FILE for netrc"),
        flag(ids::NETRC_OPTIONAL, None, "Use either .netrc or URL"),
        flag(ids::NEXT, Some("-:"), "Make next URL use its separate set of options"),
        flag(ids::NO_ALPN, None, "Disable the ALPN TLS extension"),
        flag(ids::NO_BUFFER, Some("-N"), "Disable buffering of the output stream"),
        flag(ids::NO_KEEPALIVE, None, "Disable TCP keepalive on the connection"),
        flag(ids::NO_NPN, None, "Disable the NPN TLS extension"),
        flag(ids::NO_PROGRESS_METER, None, "Do not show the progress meter"),
        flag(ids::NO_SESSIONID, None, "Disable SSL session-ID reusing"),
        argument(ids::NOPROXY, None, "no-proxy-list", "List of hosts which do not use proxy"),
        flag(ids::NTLM, None, "Use HTTP NTLM authentication"),
        argument(ids::OAUTH2_BEARER, None, "token", "OAuth 2 Bearer Token"),
        argument(ids::OUTPUT, Some("-o"), "file", "Write to file instead of stdout"),
        argument(ids::OUTPUT_DIR, None, "dir", "Directory to save files in"),
        flag(ids::PARALLEL, Some("-Z"), "Perform transfers in parallel"),
        flag(ids::PARALLEL_IMMEDIATE, None, "Do not wait for multiplexing (with --parallel)"),
        argument(ids::PARALLEL_MAX, None, "num", "Maximum concurrency for parallel transfers"),
        argument(ids::PASS, None, "phrase", "Pass phrase for the private key"),
        flag(ids::PATH_AS_IS, None, "Do not squash .. sequences in URL path"),
        argument(
            ids::PINNEDPUBKEY,
            None,
            "hashes",
            "FILE/HASHES Public key to verify peer against",
        ),
        flag(ids::POST301, None, "Do not switch to GET after following a 301"),
        flag(ids::POST302, None, "Do not switch to GET after following a 302"),
        flag(ids::POST303, None, "Do not switch to GET after following a 303"),
        flag(ids::PROGRESS_BAR, Some("-#"), "Display transfer progress as a bar"),
        argument(ids::PROTO, None, "protocols", "Enable/disable PROTOCOLS"),
        argument(ids::PROTO_DEFAULT, None, "protocol", "Use PROTOCOL for any URL missing a scheme"),
        argument(ids::PROTO_REDIR, None, "protocols", "Enable/disable PROTOCOLS on redirect"),
        argument(ids::PROXY, Some("-x"), "[protocol://]host[:port]", "Use this proxy"),
        argument(ids::PROXY_HEADER, None, "header/@file", "Pass custom header(s) to proxy"),
        flag(ids::PROXY_INSECURE, None, "Do HTTPS proxy connections without verifying the proxy"),
        argument(ids::PROXY_USER, Some("-U"), "user:password", "Proxy user and password"),
        flag(ids::PROXYTUNNEL, Some("-p"), "Operate through an HTTP proxy tunnel (using CONNECT)"),
        argument(ids::QUOTE, Some("-Q"), "command", "Send command(s) to server before transfer"),
        argument(ids::RANGE, Some("-r"), "range", "Retrieve only the bytes within RANGE"),
        argument(ids::RATE, None, "max request rate", "Request rate for serial transfers"),
        flag(ids::RAW, None, "Do HTTP \"raw\"; no transfer decoding"),
        argument(ids::REFERER, Some("-e"), "URL", "Referrer URL"),
        flag(ids::REMOTE_HEADER_NAME, Some("-J"), "Use the header-provided filename"),
        flag(ids::REMOTE_NAME, Some("-O"), "Write output to a file named as the remote file"),
        flag(ids::REMOTE_NAME_ALL, None, "Use the remote file name for all URLs"),
        flag(ids::REMOTE_TIME, Some("-R"), "Set the remote file's time on the local output"),
        argument(ids::REQUEST, Some("-X"), "method", "Specify request method to use"),
        argument(ids::REQUEST_TARGET, None, "path", "Specify the target for this request"),
        argument(
            ids::RESOLVE,
            None,
            "[+]host:port:addr[,addr]...",
            "Resolve the host+port to this address",
        ),
        argument(ids::RETRY, None, "num", "Retry request if transient problems occur"),
        flag(ids::RETRY_ALL_ERRORS, None, "Retry all errors (use with --retry)"),
        flag(ids::RETRY_CONNREFUSED, None, "Retry on connection refused (use with --retry)"),
        argument(ids::RETRY_DELAY, None, "seconds", "Wait time between retries"),
        argument(ids::RETRY_MAX_TIME, None, "seconds", "Retry only within this period"),
        flag(ids::SASL_IR, None, "Enable initial response in SASL authentication"),
        argument(ids::SERVICE_NAME, None, "name", "SPNEGO service name"),
        flag(ids::SHOW_ERROR, Some("-S"), "Show error even when -s is used"),
        flag(ids::SILENT, Some("-s"), "Silent mode"),
        argument(ids::SOCKS4, None, "host[:port]", "SOCKS4 proxy on given host + port"),
        argument(ids::SOCKS4A, None, "host[:port]", "SOCKS4a proxy on given host + port"),
        argument(ids::SOCKS5, None, "host[:port]", "SOCKS5 proxy on given host + port"),
        argument(
            ids::SOCKS5_HOSTNAME,
            None,
            "host[:port]",
            "SOCKS5 proxy, pass host name to proxy",
        ),
        argument(ids::SPEED_LIMIT, Some("-Y"), "speed", "Stop transfers slower than this"),
        argument(
            ids::SPEED_TIME,
            Some("-y"),
            "seconds",
            "Trigger 'speed-limit' abort after this time",
        ),
        flag(ids::SSL, None, "Try SSL/TLS"),
        flag(ids::SSL_REQD, None, "Require SSL/TLS"),
        flag(ids::SSLV2, Some("-2"), "Use SSLv2"),
        flag(ids::SSLV3, Some("-3"), "Use SSLv3"),
        argument(ids::STDERR, None, "file", "Where to redirect stderr"),
        flag(ids::STYLED_OUTPUT, None, "Enable styled output for HTTP headers"),
        flag(ids::TCP_FASTOPEN, None, "Use TCP Fast Open"),
        flag(ids::TCP_NODELAY, None, "Use the TCP_NODELAY option"),
        argument(ids::TELNET_OPTION, Some("-t"), "opt=val", "Set telnet option"),
        argument(ids::TIME_COND, Some("-z"), "time", "Transfer based on a time condition"),
        argument(ids::TLS_MAX, None, "VERSION", "Set maximum allowed TLS version"),
        flag(ids::TLSV1, Some("-1"), "Use TLSv1.0 or greater"),
        flag(ids::TLSV1_2, None, "Use TLSv1.2 or greater"),
        flag(ids::TLSV1_3, None, "Use TLSv1.3 or greater"),
        flag(ids::TR_ENCODING, None, "Request compressed transfer encoding"),
        argument(ids::TRACE, None, "file", "Write a debug trace to FILE"),
        argument(ids::TRACE_ASCII, None, "file", "Like --trace, but without hex output"),
        flag(ids::TRACE_TIME, None, "Add time stamps to trace/verbose output"),
        argument(ids::UNIX_SOCKET, None, "path", "Connect through this Unix domain socket"),
        argument(ids::UPLOAD_FILE, Some("-T"), "file", "Transfer local FILE to destination"),
        argument(ids::URL, None, "url", "URL to work with"),
        argument(ids::URL_QUERY, None, "data", "Add a URL query part"),
        flag(ids::USE_ASCII, Some("-B"), "Use ASCII/text transfer"),
        argument(ids::USER, Some("-u"), "user:password", "Server user and password"),
        argument(ids::USER_AGENT, Some("-A"), "name", "Send User-Agent <name> to server"),
        flag(ids::VERBOSE, Some("-v"), "Make the operation more talkative"),
        flag(ids::VERSION, Some("-V"), "Show version number and quit"),
        argument(ids::WRITE_OUT, Some("-w"), "format", "Use output FORMAT after completion"),
        flag(ids::XATTR, None, "Store metadata in extended file attributes"),
    ]
}
