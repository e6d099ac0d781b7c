//! Every operation the services API exposes, as static [`Endpoint`]s.
//!
//! The typed methods on [`Client`](crate::Client) are thin shims over these;
//! they can also be driven directly with [`Client::call`](crate::Client::call)
//! or looked up by name with [`find`].

use crate::endpoint::{
    Endpoint, Host, Location, Message, Param, Reshape,
    Verb::{Get, Post},
};

const KEY: &str = "You didn't provide a API Key";
const KEY_BANG: &str = "You didn't provide a API Key!";
const PASTE_KEY: &str = "You didn't provide a Pastebin API Key";

const IMAGE_FAILED: &str = "Unknown error while trying to fetch the image from the API";
const DBL_TOKEN: &str = "You didn't provide a Discord Bot List(top.gg) token!";
const DBL_ID: &str = "You didn't provide a Discord Bot or User ID";

/// A keyed GET on the primary host taking no parameters.
const fn primary(name: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        name,
        host: Host::Primary,
        verb: Get,
        path,
        fixed: &[],
        params: &[],
        missing_key: Some(KEY),
        no_response: Message::Fixed(""),
        reshape: Reshape::None,
    }
}

/// Link to the support page, relative to the primary base URL.
pub const SUPPORT_PATH: &str = "/site/support";

// pastebin

/// Fetch a paste by id.
pub const PASTE_GET: Endpoint = Endpoint {
    params: &[Param::required("id", "You didn't provide a paste ID!").at(Location::Path)],
    missing_key: Some(PASTE_KEY),
    no_response: Message::Fixed("No response from the Pastebin API"),
    ..primary("paste.get", "/bin/api")
};

/// Create a paste. Sends `{content, priv, title}` as JSON.
pub const PASTE_POST: Endpoint = Endpoint {
    verb: Post,
    params: &[
        Param::required(
            "content",
            "You didn't provide any content to post to the pastebin API",
        )
        .at(Location::Body),
        Param::with_default("priv", "false")
            .lenient_bool()
            .at(Location::Body),
        Param::nullable("title"),
    ],
    missing_key: Some(PASTE_KEY),
    no_response: Message::Fixed("No response from the Pastebin API!"),
    ..primary("paste.post", "/bin/api")
};

// hastebin

/// Default hastebin host.
pub const HASTE_URL: &str = "https://haste.superchiefyt.tk";

const HASTE_FAILED: Message = Message::Fixed("No response from the hastebin website.");

/// Fetch a hastebin document. `url` overrides the hastebin host.
pub const HASTE_GET: Endpoint = Endpoint {
    host: Host::Haste,
    params: &[
        Param::required("id", "You didn't provide a paste ID!").at(Location::Path),
        Param::optional("url").at(Location::BaseUrl),
    ],
    missing_key: None,
    no_response: HASTE_FAILED,
    ..primary("haste.get", "/documents")
};

/// Upload a hastebin document. Answers `{status, id, url}`.
pub const HASTE_POST: Endpoint = Endpoint {
    host: Host::Haste,
    verb: Post,
    params: &[
        Param::required("content", "You didn't provide any content!").at(Location::RawBody),
        Param::optional("url").at(Location::BaseUrl),
        Param::with_default("extension", "js").at(Location::Local),
    ],
    missing_key: None,
    no_response: HASTE_FAILED,
    reshape: Reshape::Upload {
        extension: "extension",
    },
    ..primary("haste.post", "/documents")
};

// top.gg (discord bot list)

/// Bot or user stats from top.gg.
pub const DBL_STATS: Endpoint = Endpoint {
    params: &[
        Param::required("token", DBL_TOKEN).at(Location::Header),
        Param::required("id", DBL_ID),
    ],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed(IMAGE_FAILED),
    ..primary("dbl.stats", "/api/dbl/stats")
};

/// Posts server/shard counts to top.gg. The service takes a GET with a JSON body.
pub const DBL_POST: Endpoint = Endpoint {
    params: &[
        Param::required("token", DBL_TOKEN).at(Location::Header),
        Param::required("id", DBL_ID),
        Param::required("servers", "You didn't provide 'servers' number!")
            .number("The 'servers' number value isn't valid!")
            .at(Location::Body),
        Param::with_default("shards", "0")
            .number("The 'shards' number value isn't valid!")
            .at(Location::Body),
    ],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed(IMAGE_FAILED),
    ..primary("dbl.post", "/api/dbl/post")
};

// general api

/// A random image from an image category (`cats`, `pugs`, `dogs`, ...).
pub const PHOTOS: Endpoint = Endpoint {
    params: &[Param::required(
        "image",
        "You didn't provide an image endpoint, ex: 'cats', 'pugs', 'dogs'",
    )
    .at(Location::Path)],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed(IMAGE_FAILED),
    ..primary("photos", "/api/photos")
};

/// A special image endpoint.
pub const SPECIAL: Endpoint = Endpoint {
    params: &[Param::required("type", "You didn't provide an special endpoint")],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed(IMAGE_FAILED),
    ..primary("special", "/api/special")
};

/// Translate `text` into the `to` language.
pub const TRANSLATE: Endpoint = Endpoint {
    params: &[
        Param::required("to", "You didn't provide the 'to' language!"),
        Param::required("text", "You didn't provide any text!"),
    ],
    no_response: Message::Fixed("Unknown error while trying to fetch the translation from the API"),
    ..primary("translate", "/api/translate")
};

/// Invite links; `type` defaults to `both`.
pub const INVITES: Endpoint = Endpoint {
    params: &[Param::with_default("type", "both").lowercase()],
    no_response: Message::Fixed("Unknown error while trying to fetch the invites from the API"),
    ..primary("invites", "/api/invites")
};

/// Facts; `type` defaults to `random`.
pub const FACTS: Endpoint = Endpoint {
    params: &[Param::with_default("type", "random").lowercase()],
    no_response: Message::Fixed("Unknown error while trying to fetch the fact(s) from the API"),
    ..primary("facts", "/api/facts")
};

/// A random meme. `clean` must be a bool.
pub const MEMES: Endpoint = Endpoint {
    params: &[Param::with_default("clean", "false")
        .boolean("The 'clean' you provided is invalid, it has to be a boolean.")],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed("I was unable to fetch the meme :("),
    ..primary("memes", "/api/photos/memes")
};

/// Magic 8-ball answer.
pub const EIGHT_BALL: Endpoint = Endpoint {
    no_response: Message::Fixed("Unknown error while trying to fetch 8ball from the API"),
    ..primary("8ball", "/api/8ball")
};

/// Dog breed info; `type` defaults to empty and `breed` to `none`.
pub const DOG_BREED: Endpoint = Endpoint {
    params: &[
        Param::with_default("type", ""),
        Param::with_default("breed", "none"),
    ],
    no_response: Message::Fixed("Unable to fetch the dog-breed from the API site!"),
    ..primary("dogbreed", "/api/dogbreed")
};

/// npm package lookup.
pub const NPM: Endpoint = Endpoint {
    params: &[Param::required("name", "You didn't provide a npm package name!")],
    no_response: Message::Fixed("Unable to fetch the npm package from the API site!"),
    ..primary("npm", "/api/npm")
};

/// Local time for a place, or the full list when `all` is on.
pub const TIME: Endpoint = Endpoint {
    params: &[
        Param::optional("all").switch("'all' isn't a boolean!"),
        Param::required_unless("place", "all", "You didn't provide a place!").lowercase(),
    ],
    missing_key: Some("You didn't provide a API key"),
    no_response: Message::Flagged {
        flag: "all",
        set: "Unable to fetch the times list!",
        unset: "Unable to fetch the info for {place}",
    },
    ..primary("time", "/api/time")
};

/// discord.js documentation search.
pub const DOCS: Endpoint = Endpoint {
    params: &[
        Param::required("search", "Well tell me what you want to search for?"),
        Param::with_default("project", "stable"),
        Param::with_default("branch", "stable"),
    ],
    missing_key: Some(KEY_BANG),
    no_response: Message::Fixed("I was unable to fetch the docs infomration"),
    ..primary("docs", "/api/discord.js-docs")
};

// platforms

/// Mixer user lookup.
pub const MIXER: Endpoint = Endpoint {
    params: &[Param::required("user", "You didn't provide a mixer username")],
    no_response: Message::Fixed("Unable to fetch the mixer information from the API site"),
    ..primary("platform.mixer", "/api/platform/mixer")
};

/// YouTube channel stats by id or name.
pub const YT_STATS: Endpoint = Endpoint {
    params: &[
        Param::required("token", "You didn't provide a youtube API key"),
        Param::required("user", "You didnt provide a channel ID or name!"),
    ],
    no_response: Message::Fixed("Unable to fetch the ytstats information from the API site"),
    ..primary("platform.yt-stats", "/api/platform/yt-stats")
};

/// Twitch channel lookup.
pub const TWITCH: Endpoint = Endpoint {
    params: &[
        Param::required("token", "You didn't provide a twitch API key"),
        Param::required("user", "You didnt provide a channel name!"),
    ],
    no_response: Message::Fixed("Unable to fetch the twitch information from the API site"),
    ..primary("platform.twitch", "/api/platform/twitch")
};

/// Roblox account linked to a Discord user id.
pub const ROBLOX: Endpoint = Endpoint {
    params: &[Param::required("id", "You didn't provide a Discord user ID")],
    no_response: Message::Fixed("Unable to fetch the roblox information from the API site"),
    ..primary("platform.roblox", "/api/platform/roblox")
};

/// Roblox group lookup.
pub const ROBLOX_GROUP: Endpoint = Endpoint {
    params: &[Param::required("id", "You didn't provide a roblox group ID")],
    no_response: Message::Fixed("Unable to fetch the roblox group information from the API site"),
    ..primary("platform.roblox-group", "/api/platform/roblox-group")
};

/// Fortnite player stats; `platform` defaults to `pc`.
pub const FORTNITE: Endpoint = Endpoint {
    params: &[
        Param::required("token", "You didn't provide a Fortnite API key"),
        Param::required("user", "You didn't provide a username!"),
        Param::with_default("platform", "pc"),
    ],
    no_response: Message::Fixed("Unable to fetch the fortnite information from the API site"),
    ..primary("platform.fortnite", "/api/platform/fortnite")
};

/// Paladins player lookup; `platform` defaults to `pc`.
pub const PALADINS: Endpoint = Endpoint {
    params: &[
        Param::required("dev_id", "You didn't provide the 'devID'").wire("devID"),
        Param::required("auth", "You didn't provide the 'auth'"),
        Param::required("user", "You didn't provide a username!"),
        Param::with_default("platform", "pc"),
    ],
    no_response: Message::Fixed("Nothing found for that user!"),
    ..primary("platform.paladins", "/api/platform/paladins")
};

/// IMDb show or movie lookup.
pub const IMDB: Endpoint = Endpoint {
    params: &[
        Param::required("token", "You didn't provide a 'imdb' API key!"),
        Param::required("show", "You didn't provide the tv-show or movie name!"),
    ],
    no_response: Message::Fixed("Unable to fetch the imdb information, try again later."),
    ..primary("platform.imdb", "/api/platform/imdb")
};

/// YouTube search; `type` defaults to `video`.
pub const YT_SEARCH: Endpoint = Endpoint {
    params: &[
        Param::required("token", "You didn't provide a youtube API key!"),
        Param::required("name", "You didn't provide the name to search for!"),
        Param::with_default("type", "video"),
    ],
    no_response: Message::Fixed("Unable to fetch the ytsearch information, try again later."),
    ..primary("platform.yt-search", "/api/platform/yt-search")
};

// developer blacklists
//
// These change remote state but the service only accepts GET with an
// `action` query pair.

const USERS: &str = "/dev/blacklists/users";
const SERVERS: &str = "/dev/blacklists/servers";

/// Every blacklisted user.
pub const BLACKLIST_USERS_LIST: Endpoint = Endpoint {
    fixed: &[("action", "list")],
    no_response: Message::Fixed("Unable to fetch the users blacklist from the API site"),
    ..primary("blacklist.users.list", USERS)
};

/// Blacklist a user.
pub const BLACKLIST_USERS_ADD: Endpoint = Endpoint {
    fixed: &[("action", "add")],
    params: &[
        Param::required("id", "You didn't provide a user ID!"),
        Param::optional("reason"),
    ],
    no_response: Message::Fixed("Unable to add that user to the blacklist"),
    ..primary("blacklist.users.add", USERS)
};

/// Remove a user from the blacklist.
pub const BLACKLIST_USERS_REMOVE: Endpoint = Endpoint {
    fixed: &[("action", "remove")],
    params: &[Param::required("id", "You didn't provide a user ID!")],
    no_response: Message::Fixed("Unable to remove that user from the blacklist"),
    ..primary("blacklist.users.remove", USERS)
};

/// Whether a user is blacklisted.
pub const BLACKLIST_USERS_CHECK: Endpoint = Endpoint {
    fixed: &[("action", "check")],
    params: &[Param::required("id", "You didn't provide a user ID!")],
    no_response: Message::Fixed("Unable to check the users blacklist"),
    ..primary("blacklist.users.check", USERS)
};

/// Every blacklisted server.
pub const BLACKLIST_SERVERS_LIST: Endpoint = Endpoint {
    fixed: &[("action", "list")],
    no_response: Message::Fixed("Unable to fetch the servers blacklist from the API site"),
    ..primary("blacklist.servers.list", SERVERS)
};

/// Blacklist a server.
pub const BLACKLIST_SERVERS_ADD: Endpoint = Endpoint {
    fixed: &[("action", "add")],
    params: &[
        Param::required("id", "You didn't provide a server ID!"),
        Param::optional("reason"),
    ],
    no_response: Message::Fixed("Unable to add that server to the blacklist"),
    ..primary("blacklist.servers.add", SERVERS)
};

/// Remove a server from the blacklist.
pub const BLACKLIST_SERVERS_REMOVE: Endpoint = Endpoint {
    fixed: &[("action", "remove")],
    params: &[Param::required("id", "You didn't provide a server ID!")],
    no_response: Message::Fixed("Unable to remove that server from the blacklist"),
    ..primary("blacklist.servers.remove", SERVERS)
};

/// Whether a server is blacklisted.
pub const BLACKLIST_SERVERS_CHECK: Endpoint = Endpoint {
    fixed: &[("action", "check")],
    params: &[Param::required("id", "You didn't provide a server ID!")],
    no_response: Message::Fixed("Unable to check the servers blacklist"),
    ..primary("blacklist.servers.check", SERVERS)
};

/// All endpoints, in documentation order.
pub const ALL: &[&Endpoint] = &[
    &PASTE_GET,
    &PASTE_POST,
    &HASTE_GET,
    &HASTE_POST,
    &DBL_STATS,
    &DBL_POST,
    &PHOTOS,
    &SPECIAL,
    &TRANSLATE,
    &INVITES,
    &FACTS,
    &MEMES,
    &EIGHT_BALL,
    &DOG_BREED,
    &NPM,
    &TIME,
    &DOCS,
    &MIXER,
    &YT_STATS,
    &TWITCH,
    &ROBLOX,
    &ROBLOX_GROUP,
    &FORTNITE,
    &PALADINS,
    &IMDB,
    &YT_SEARCH,
    &BLACKLIST_USERS_LIST,
    &BLACKLIST_USERS_ADD,
    &BLACKLIST_USERS_REMOVE,
    &BLACKLIST_USERS_CHECK,
    &BLACKLIST_SERVERS_LIST,
    &BLACKLIST_SERVERS_ADD,
    &BLACKLIST_SERVERS_REMOVE,
    &BLACKLIST_SERVERS_CHECK,
];

/// Looks an endpoint up by its dotted name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().copied().find(|endpoint| endpoint.name == name)
}
