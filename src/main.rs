fn main() {
    parseval::term::main()
}
