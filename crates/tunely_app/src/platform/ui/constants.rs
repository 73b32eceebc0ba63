pub const TITLE: &str = "Tunely : Generate Your Customized Playlist";
pub const INSTRUCTION: &str = "Tell us what you're feeling, what you love, or the kind of songs you want, \
and we'll create a personalized playlist just for you!";
pub const INPUT_PLACEHOLDER: &str = "Type here...";
pub const QUIT_COMMAND: &str = ":quit";
pub const PLAYLIST_HEADING: &str = "Your Playlist:";
pub const DEFAULT_LINK_LABEL: &str = "Open Playlist";
pub const GENERATING_FOR: &str = "Generating a playlist for";
pub const BUSY_NOTICE: &str = "Still generating, please wait.";
