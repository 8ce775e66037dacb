/// Block-letter banner shown from the banner screen onwards.
pub const BANNER: &[&str] = &[
    "███╗   ███╗ ██████╗ ██╗  ██╗██╗██╗         ████████╗██╗   ██╗██╗",
    "████╗ ████║██╔═══██╗██║  ██║██║██║         ╚══██╔══╝██║   ██║██║",
    "██╔████╔██║██║   ██║███████║██║██║            ██║   ██║   ██║██║",
    "██║╚██╔╝██║██║   ██║██╔══██║██║██║            ██║   ██║   ██║██║",
    "██║ ╚═╝ ██║╚██████╔╝██║  ██║██║███████╗       ██║   ╚██████╔╝██║",
    "╚═╝     ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝╚══════╝       ╚═╝    ╚═════╝ ╚═╝",
];

pub const BANNER_TAGLINE: &str = "~ S U R F I N G   E N T R O P Y   S T A T E S ~";

pub const BANNER_SUBTITLE: &str = "Full-stack developer • System architect • Code craftsman";

/// Display width of the widest banner line.
pub fn width() -> u16 {
    BANNER
        .iter()
        .chain(std::iter::once(&BANNER_TAGLINE))
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16
}
