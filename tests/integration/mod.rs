mod helpers;
mod test_evr;
mod test_git;
mod test_uses;
mod test_version;
