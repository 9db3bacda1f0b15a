fn main() {
    cfn_resolve::cli::run();
}
