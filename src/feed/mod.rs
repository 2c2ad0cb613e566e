/// Job feed access module
///
/// This module performs the one-shot read of the job feed and parses
/// it into job records. The feed is read exactly once at startup;
/// nothing here is called again afterwards.

pub mod loader;
