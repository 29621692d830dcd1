fn main() {
    folio::mount();
}
