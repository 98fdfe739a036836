mod test_segment_hexahedron_basic;
