mod selection_set_synthesizer_tests;
