fn main() {
    deploy_deps::app::cli::run();
}
