//! Built-in list servers.
//!
//! Used only when the operator supplies no servers of their own.

/// Well-known DNS blacklists queried by default.
pub const DEFAULT_SERVERS: &[&str] = &[
    "zen.spamhaus.org",
    "sbl.spamhaus.org",
    "xbl.spamhaus.org",
    "pbl.spamhaus.org",
    "bl.spamcop.net",
    "b.barracudacentral.org",
    "psbl.surriel.com",
    "bl.mailspike.net",
    "dnsbl-1.uceprotect.net",
    "dnsbl-2.uceprotect.net",
    "dnsbl-3.uceprotect.net",
    "dnsbl.dronebl.org",
    "rbl.efnetrbl.org",
    "all.s5h.net",
    "ix.dnsbl.manitu.net",
    "truncate.gbudb.net",
    "bl.blocklist.de",
    "db.wpbl.info",
    "spam.spamrats.com",
    "dyna.spamrats.com",
    "noptr.spamrats.com",
    "cbl.abuseat.org",
    "dnsbl.justspam.org",
    "bl.nordspam.com",
    "rbl.interserver.net",
    "ubl.unsubscore.com",
    "bl.spameatingmonkey.net",
    "backscatter.spameatingmonkey.net",
    "spam.dnsbl.anonmails.de",
    "dnsbl.spfbl.net",
    "dnsbl.inps.de",
    "bl.suomispam.net",
    "spamrbl.imp.ch",
    "wormrbl.imp.ch",
    "dnsbl.zapbl.net",
];
