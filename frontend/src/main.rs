fn main() {
    seda24_frontend::boot();
}
